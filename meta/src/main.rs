fn main() {
    multiversx_sc_meta_lib::cli_main::<halving_token::AbiProvider>();
}

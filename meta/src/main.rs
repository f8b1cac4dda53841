fn main() {
    multiversx_sc_meta_lib::cli_main::<token_curated_registry::AbiProvider>();
}

fn main() {
    #[cfg(feature = "csr")]
    nbuyit_client::mount();
}

fn main() {
    println!("cargo:rerun-if-changed=.env");
    println!("cargo:rerun-if-env-changed=SERVER_URL");

    // A missing .env is fine; the compiled default is used instead.
    dotenvy::dotenv().ok();

    if let Ok(server_url) = std::env::var("SERVER_URL") {
        println!("cargo:rustc-env=SERVER_URL={server_url}");
    }
}

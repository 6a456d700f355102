fn main() {
    let code = sr_core::cli::run();
    std::process::exit(code.as_i32());
}

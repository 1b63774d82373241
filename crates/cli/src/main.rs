fn main() {
    if let Err(e) = logscope_cli::run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn main() {
    if let Err(e) = penguinui_cli::run_cli() {
        std::process::exit(penguinui_cli::report_error(&e));
    }
}

fn main() {
    if let Err(err) = docpipe::run() {
        eprintln!("{}", docpipe::format_error(&err));
        std::process::exit(1);
    }
}

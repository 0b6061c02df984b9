fn main() {
    if let Err(err) = assetspec::run() {
        eprintln!("{}", assetspec::format_error(&err));
        std::process::exit(1);
    }
}

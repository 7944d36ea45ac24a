use std::process;

fn main() {
    if let Err(e) = kanji_drill::run() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn main() {
    if let Err(e) = water_balance_rs::adapters::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

//! Default binary placeholder.
//!
//! The ticketing pipeline is split into four independent binaries under
//! `src/bin/` (`server`, `aggregator`, `assigner`, `reaper_client`); run one
//! of those directly, e.g. `cargo run --bin server`.

fn main() {
    eprintln!("run one of: cargo run --bin server|aggregator|assigner|reaper_client");
    std::process::exit(1);
}

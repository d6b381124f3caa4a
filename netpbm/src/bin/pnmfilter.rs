use netpbm::cli::{Args, run};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Args = argh::from_env();
    match run(&args) {
        Ok(path) => log::info!("wrote {}", path.display()),
        Err(e) => {
            eprintln!("pnmfilter: {e}");
            std::process::exit(1);
        }
    }
}

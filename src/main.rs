use emberfield::Backdrop;
use env_logger::Env;
use log::error;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    if let Err(e) = Backdrop::new().run() {
        error!("{}", e);
        std::process::exit(1);
    }
}

use std::env;
use std::process;

use scroll_led::app::{self, SystemHost};
use scroll_led::settings::Settings;
use scroll_led::{logging, options, Error};

fn fail(e: Error) -> ! {
    eprintln!("scroll-led: {}", e);
    process::exit(1);
}

fn main() {
    let opts = match options::parse(env::args()) {
        Ok(opts) => opts,
        Err(Error::Usage(e)) => e.exit(),
        Err(e) => fail(e),
    };

    logging::init(opts.verbose);

    let settings = Settings::new(&opts.settings_file)
        .map_err(Error::from)
        .unwrap_or_else(|e| fail(e));

    match app::run(&opts, &settings, &SystemHost) {
        Ok(code) => process::exit(code),
        Err(e) => fail(e),
    }
}

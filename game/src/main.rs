use clap::Parser;

mod app;
mod args;

use app::App;
use args::Args;

fn main() {
    let args = <Args as Parser>::parse();

    let settings = match args.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Could not read settings: {e}");
            std::process::exit(1);
        }
    };

    let app = App::new(settings).unwrap();

    app.run();
}

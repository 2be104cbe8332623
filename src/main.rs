use std::{env, process};

use email_templates::{Settings, TargetRef};
use tracing::error;

#[tokio::main]
async fn main() {
    let args = env::args().collect::<Vec<_>>();

    let target = match args.len() {
        1 => None,
        3 => match args[2].parse() {
            Ok(id) => Some(TargetRef::new(args[1].as_str(), id)),
            Err(_) => {
                eprintln!("object id must be a number, got {:?}", args[2]);
                process::exit(1);
            }
        },
        _ => {
            eprintln!("usage: {} [<content-type> <object-id>]", args[0]);
            process::exit(1);
        }
    };

    let settings = Settings::new().expect("Unable to read configuration");
    email_templates::init_logging(settings.get_log_level());

    if let Err(e) = email_templates::real_main(settings, target).await {
        error!("{}", e);
        process::exit(1);
    }
}

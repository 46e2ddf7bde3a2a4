//! Submit a form from the command line and print the outcome.
//!
//! Usage: `cargo run --example submit_form -- POST http://127.0.0.1:8080/dogs name=Eva age=4`

use std::env;

use log::{error, info};
use serde_json::Value;

use formsubmit_rs::{Form, FormData, ReqwestTransport, TransportConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = env::args().skip(1);
    let method = args.next().unwrap_or_else(|| "GET".to_string());
    let url = args.next().unwrap_or_else(|| "http://127.0.0.1:8080/dogs".to_string());

    // Remaining arguments are key=value fields; values that parse as JSON keep their type
    let mut data = FormData::new();
    for field in args {
        if let Some((key, value)) = field.split_once('=') {
            let value = serde_json::from_str(value)
                .unwrap_or_else(|_| Value::String(value.to_string()));
            data.insert(key.to_string(), value);
        }
    }

    let form = Form::with_data(&method, url, data)?;
    let transport = ReqwestTransport::new(TransportConfig::default())?;

    info!("Submitting {} {}", form.method(), form.url());

    let Some(submission) = form.submit(&transport) else {
        return Ok(());
    };

    match submission.await {
        Ok(response) => {
            info!("Submitted with status {}", response.status);
            println!("{}", serde_json::to_string_pretty(&response.data)?);
        }
        Err(err) => {
            error!("Submission failed: {err}");
            for (field, messages) in form.errors().all() {
                println!("{field}: {}", messages.join(", "));
            }
        }
    }

    Ok(())
}

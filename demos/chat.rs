use std::io::{self, BufRead, Write};
use std::time::Duration;

use clap::{arg, Command};
use log::info;

use fitfusion::chat::blocking::ChatSession;
use fitfusion::chat::ChatOptions;
use fitfusion::responder::MatchMode;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let matches = Command::new("chat")
        .version("1.0")
        .about("Chats with the FitFusion assistant on the terminal")
        .arg(arg!(--delay_ms <MILLIS>).value_parser(clap::value_parser!(u64)))
        .arg(arg!(--match_mode <MODE>).default_value("substring"))
        .get_matches();

    let mut options = ChatOptions::from_env()?;
    if let Some(delay) = matches.get_one::<u64>("delay_ms") {
        options = options.with_reply_delay(Duration::from_millis(*delay));
    }
    let match_mode: MatchMode = matches.get_one::<String>("match_mode").expect("match_mode has a default").parse()?;
    options = options.with_match_mode(match_mode);

    info!("options: {options:?}");

    let mut session = ChatSession::with_options(options);
    println!("assistant: {}", session.conversation().turns()[0].content);

    let stdin = io::stdin();
    loop {
        print!("you: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match session.send(line.trim_end_matches(['\r', '\n'])) {
            Ok(reply) => println!("assistant: {}", reply.content),
            Err(fitfusion::Error::EmptyMessage) => continue,
            Err(err) => return Err(err.into()),
        }
    }

    println!("{} turns", session.conversation().len());
    Ok(())
}

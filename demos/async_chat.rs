use clap::{arg, Command};

use fitfusion::chat::{ChatOptions, ChatSession};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let matches = Command::new("async_chat")
        .version("1.0")
        .about("Asks the FitFusion assistant each question given on the command line")
        .arg(arg!(<QUESTION> ... "questions to ask"))
        .get_matches();

    let mut session = ChatSession::with_options(ChatOptions::from_env()?);

    for question in matches.get_many::<String>("QUESTION").into_iter().flatten() {
        let reply = session.send(question).await?;
        println!("> {question}\n{}\n", reply.content);
    }

    Ok(())
}

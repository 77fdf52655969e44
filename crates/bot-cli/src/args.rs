use clap::Parser;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref THREAD_ID_RE: Regex = Regex::new(r"thread_([a-zA-Z0-9]+)").unwrap();
    static ref MESSAGE_ID_RE: Regex = Regex::new(r"msg_([a-zA-Z0-9]+)").unwrap();
}

#[derive(Debug, Parser)]
#[command(name = "bot-cli")]
#[command(about = "Ask the configured assistant a question")]
#[command(version)]
pub struct Args {
    /// Question to send
    #[arg(value_parser = parse_question)]
    pub question: String,

    /// Existing thread to continue instead of starting a new one
    #[arg(value_parser = parse_thread_id)]
    pub thread_id: Option<String>,

    /// List only messages created after this message id
    #[arg(value_parser = parse_message_id)]
    pub message_id: Option<String>,
}

fn parse_question(value: &str) -> Result<String, String> {
    if value.is_empty() {
        return Err("question must not be empty".to_string());
    }
    Ok(value.to_string())
}

fn parse_thread_id(value: &str) -> Result<String, String> {
    if THREAD_ID_RE.is_match(value) {
        Ok(value.to_string())
    } else {
        Err(format!("invalid thread id: {value}"))
    }
}

fn parse_message_id(value: &str) -> Result<String, String> {
    if MESSAGE_ID_RE.is_match(value) {
        Ok(value.to_string())
    } else {
        Err(format!("invalid message id: {value}"))
    }
}

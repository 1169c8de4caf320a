//! Concierge chat CLI.
//!
//! A terminal chat client for the Concierge backend. The CLI has no answer
//! logic of its own; it renders whatever the HTTP API returns.

mod client;

use clap::Parser;
use client::{BackendClient, ChatResponse};
use concierge_core::AppResult;
use std::io::{BufRead, Write};

/// Concierge chat client
#[derive(Parser, Debug)]
#[command(name = "concierge")]
#[command(about = "Chat with the Concierge answer service", long_about = None)]
#[command(version)]
struct Cli {
    /// Backend API URL
    #[arg(short, long, env = "CONCIERGE_URL", default_value = "http://localhost:8000")]
    url: String,

    /// Send a single query and exit instead of starting the chat loop
    #[arg(short, long)]
    query: Option<String>,
}

#[tokio::main]
async fn main() -> AppResult<()> {
    let cli = Cli::parse();
    let backend = BackendClient::new(&cli.url);

    match backend.health().await {
        Ok(health) => println!("Backend online: {}", health.message),
        Err(e) => {
            eprintln!("Warning: {}", e);
            eprintln!("Start the backend with: concierge-server");
        }
    }

    if let Some(query) = cli.query {
        return ask_once(&backend, &query).await;
    }

    chat_loop(&backend).await
}

/// Send one query, render the answer, and exit.
async fn ask_once(backend: &BackendClient, query: &str) -> AppResult<()> {
    match backend.chat(query).await {
        Ok(response) => println!("{}", render_response(&response)),
        Err(e) => eprintln!("Error: {}", e),
    }
    Ok(())
}

/// Interactive chat loop.
async fn chat_loop(backend: &BackendClient) -> AppResult<()> {
    println!("Ask a question; the agent decides between documents and web search.");
    println!("Type 'exit' or press Ctrl-D to quit.\n");

    let stdin = std::io::stdin();
    let mut line = String::new();

    loop {
        print!("you> ");
        std::io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF
            break;
        }

        let query = line.trim();
        if query.is_empty() {
            continue;
        }
        if query == "exit" || query == "quit" {
            break;
        }

        // Backend failures are chat messages, not crashes
        match backend.chat(query).await {
            Ok(response) => println!("\n{}\n", render_response(&response)),
            Err(e) => println!("\nCould not get an answer: {}\n", e),
        }
    }

    println!("Bye.");
    Ok(())
}

/// Format a chat response for the terminal.
fn render_response(response: &ChatResponse) -> String {
    let tool = match response.decision.as_str() {
        "rag_search" => "documents",
        "web_search" => "web search",
        other => other,
    };

    let mut out = String::new();
    out.push_str(&response.result);
    out.push_str(&format!("\n\n[answered via {}]", tool));

    if !response.sources.is_empty() {
        out.push_str("\nSources:");
        for (i, source) in response.sources.iter().enumerate() {
            out.push_str(&format!("\n  {}. {}", i + 1, source));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_response(decision: &str, sources: Vec<&str>) -> ChatResponse {
        ChatResponse {
            query: "q".to_string(),
            decision: decision.to_string(),
            result: "An answer.".to_string(),
            sources: sources.into_iter().map(String::from).collect(),
            status: "success".to_string(),
        }
    }

    #[test]
    fn test_render_rag_response() {
        let rendered = render_response(&sample_response("rag_search", vec!["fastapi_docs.txt"]));
        assert!(rendered.contains("An answer."));
        assert!(rendered.contains("answered via documents"));
        assert!(rendered.contains("1. fastapi_docs.txt"));
    }

    #[test]
    fn test_render_web_response_without_sources() {
        let rendered = render_response(&sample_response("web_search", vec![]));
        assert!(rendered.contains("answered via web search"));
        assert!(!rendered.contains("Sources:"));
    }
}

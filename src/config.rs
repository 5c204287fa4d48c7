use clap::Parser;

// CLI argument structure
#[derive(Parser, Debug, Clone)]
#[command(name = "translate-gateway")]
#[command(about = "Streaming translation gateway for a local Ollama backend")]
pub struct Args {
    // Port to run the server on
    #[arg(short, long, default_value_t = 3000)]
    pub port: u16,

    // Ollama server url
    #[arg(short, long, default_value = "http://localhost:11434")]
    pub ollama_url: String,
}

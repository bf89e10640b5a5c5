pub const DEFAULT_HOSTED_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_HOSTED_MODEL: &str = "llama-3.3-70b-versatile";
pub const DEFAULT_HOSTED_TEMPERATURE: f32 = 0.0;
pub const DEFAULT_PIPELINE_BASE_URL: &str = "http://127.0.0.1:8080";
pub const DEFAULT_PIPELINE_MODEL: &str = "unsloth/Llama-3.2-1B";
pub const DEFAULT_PIPELINE_MAX_LENGTH: u32 = 1024;
pub const DEFAULT_PIPELINE_PAD_TOKEN_ID: u32 = 50256;
pub const DEFAULT_DAEMON_BASE_URL: &str = "http://127.0.0.1:11434";
pub const DEFAULT_DAEMON_MODEL: &str = "llama3.2";
pub const DEFAULT_CONTEXT_BASE_URL: &str = "https://en.wikipedia.org/api/rest_v1/page/summary";
pub const HOSTED_API_KEY_ENV: &str = "GROQ_API_KEY";

//! Static provider/model reference table.
//!
//! Pure front-end data: the core treats provider ids as opaque strings
//! and never imports this module. The table is passed around as plain
//! slices so alternate front ends can supply their own.

/// One supported upstream provider.
#[derive(Debug, Clone, Copy)]
pub struct Provider {
    pub id: &'static str,
    pub name: &'static str,
    pub models: &'static [&'static str],
    pub default_model: &'static str,
    /// Runs locally, no API key billing involved.
    pub local: bool,
    pub billing_url: Option<&'static str>,
}

/// All providers known to this front end.
pub const PROVIDERS: &[Provider] = &[
    Provider {
        id: "openai",
        name: "OpenAI",
        models: &[
            "gpt-4o",
            "gpt-4o-mini",
            "gpt-4-turbo",
            "gpt-4",
            "gpt-3.5-turbo",
            "o1",
            "o1-mini",
            "o3-mini",
            "gpt-4.5",
        ],
        default_model: "gpt-4o",
        local: false,
        billing_url: Some("https://platform.openai.com/settings/organization/usage"),
    },
    Provider {
        id: "anthropic",
        name: "Anthropic",
        models: &[
            "claude-opus-4-5",
            "claude-sonnet-4-6",
            "claude-haiku-3-5",
            "claude-3-5-sonnet",
            "claude-3-opus",
            "claude-3-sonnet",
        ],
        default_model: "claude-sonnet-4-6",
        local: false,
        billing_url: Some("https://console.anthropic.com/settings/billing"),
    },
    Provider {
        id: "google",
        name: "Google",
        models: &[
            "gemini-2.0-flash",
            "gemini-2.0-flash-exp",
            "gemini-1.5-pro",
            "gemini-1.5-flash",
            "gemini-1.5-flash-8b",
            "gemini-2.5-pro",
        ],
        default_model: "gemini-2.0-flash",
        local: false,
        billing_url: Some("https://aistudio.google.com/app/billing"),
    },
    Provider {
        id: "xai",
        name: "xAI",
        models: &[
            "grok-2",
            "grok-2-vision",
            "grok-beta",
            "grok-vision-beta",
            "grok-3",
            "grok-3-mini",
        ],
        default_model: "grok-2",
        local: false,
        billing_url: Some("https://console.x.ai"),
    },
    Provider {
        id: "groq",
        name: "Groq",
        models: &[
            "llama-3.3-70b-versatile",
            "mixtral-8x7b-32768",
            "llama-3.1-70b-versatile",
            "gemma2-9b-it",
            "qwen-2.5-32b",
        ],
        default_model: "llama-3.3-70b-versatile",
        local: false,
        billing_url: Some("https://console.groq.com/usage"),
    },
    Provider {
        id: "mistral",
        name: "Mistral",
        models: &[
            "mistral-large-latest",
            "mistral-small-latest",
            "codestral-latest",
            "pixtral-large-mistral-nemo",
        ],
        default_model: "mistral-small-latest",
        local: false,
        billing_url: Some("https://console.mistral.ai/home"),
    },
    Provider {
        id: "ollama",
        name: "Ollama",
        models: &[
            "llama3.3",
            "llama3.2",
            "llama3.1",
            "qwen2.5",
            "mistral",
            "codellama",
            "phi4",
            "deepseek-llm",
            "command-r",
        ],
        default_model: "llama3.3",
        local: true,
        billing_url: None,
    },
    Provider {
        id: "minimax",
        name: "MiniMax",
        models: &[
            "MiniMax-M2.1",
            "MiniMax-M2.1-lightning",
            "abab6.5s-chat",
            "abab6.5g-chat",
            "abab6",
        ],
        default_model: "MiniMax-M2.1",
        local: false,
        billing_url: Some("https://platform.minimax.io/"),
    },
    Provider {
        id: "zai",
        name: "Zhipu AI (GLM)",
        models: &["glm-4", "glm-4-flash", "glm-4-plus", "glm-4v", "glm-5", "glm-4-vision"],
        default_model: "glm-4",
        local: false,
        billing_url: Some("https://open.bigmodel.cn/"),
    },
    Provider {
        id: "openrouter",
        name: "OpenRouter",
        models: &[
            "anthropic/claude-3.5-sonnet",
            "openai/gpt-4o",
            "google/gemini-pro-1.5",
            "meta-llama/llama-3.1-70b-instruct",
            "mistralai/mistral-large",
        ],
        default_model: "anthropic/claude-3.5-sonnet",
        local: false,
        billing_url: Some("https://openrouter.ai/settings/keys"),
    },
    Provider {
        id: "cerebras",
        name: "Cerebras",
        models: &["llama-3.3-70b", "llama-3.1-70b", "mixtral-8x7b", "qwen-2.5-32b"],
        default_model: "llama-3.3-70b",
        local: false,
        billing_url: Some("https://cloud.cerebras.ai/"),
    },
    Provider {
        id: "huggingface",
        name: "HuggingFace",
        models: &[
            "meta-llama/Llama-3.3-70B-Instruct",
            "Qwen/Qwen2.5-72B-Instruct",
            "mistralai/Mixtral-8x7B-Instruct-v0.1",
        ],
        default_model: "meta-llama/Llama-3.3-70B-Instruct",
        local: false,
        billing_url: Some("https://huggingface.co/settings/billing"),
    },
    Provider {
        id: "kimi-coding",
        name: "Kimi Coding (Moonshot)",
        models: &["kimi-coder-flash", "kimi-coder", "kimi-long"],
        default_model: "kimi-coder-flash",
        local: false,
        billing_url: Some("https://platform.moonshot.cn/"),
    },
    Provider {
        id: "opencode",
        name: "OpenCode",
        models: &["opencode", "opencode-32b", "opencode-8b"],
        default_model: "opencode",
        local: false,
        billing_url: Some("https://opencode.ai/"),
    },
    Provider {
        id: "vercel-ai-gateway",
        name: "Vercel AI Gateway",
        models: &["gpt-4o", "claude-3.5-sonnet", "gemini-1.5-pro"],
        default_model: "gpt-4o",
        local: false,
        billing_url: Some("https://vercel.com/dashboard/ai-gateway"),
    },
];

/// Look up a provider by id (case-insensitive).
pub fn find(id: &str) -> Option<&'static Provider> {
    let id = id.to_ascii_lowercase();
    PROVIDERS.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_known_provider() {
        let p = find("anthropic").unwrap();
        assert_eq!(p.name, "Anthropic");
        assert_eq!(p.default_model, "claude-sonnet-4-6");
    }

    #[test]
    fn test_find_is_case_insensitive() {
        assert!(find("OpenAI").is_some());
    }

    #[test]
    fn test_find_unknown_provider() {
        assert!(find("does-not-exist").is_none());
    }

    #[test]
    fn test_default_model_is_listed() {
        for p in PROVIDERS {
            assert!(
                p.models.contains(&p.default_model),
                "{} default model missing from its model list",
                p.id
            );
        }
    }
}

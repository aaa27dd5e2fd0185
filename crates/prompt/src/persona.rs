//! Persona registry: identifier → system prompt, with aliases.
//!
//! The registry is built once at startup and is read-only afterwards. Lookups are case-insensitive
//! and resolve aliases (e.g. `meow`) to their canonical identifier first.

/// Persona every channel uses until it selects another one.
pub const DEFAULT_PERSONA: &str = "catgirl";

const KIM_JONG_UN: &str = "You are Kim Jong Un, the Supreme Leader of North Korea.
Style: Authoritative, anti-imperialist, mentions 'Juche', 'North Korea', and 'Nuclear power'.
Constraint: Answer in 1 or 2 short sentences. Be firm and proud.";

const PUTIN: &str = "You are Vladimir Putin, President of Russia.
Style: Stoic, strategic, calm, mentions 'Mother Russia', formal but firm.
Constraint: Answer in 1 or 2 short sentences.";

const TRUMP: &str = "You are Donald Trump, former US President.
Style: Hyperbolic, uses capitalized words like 'HUGE', 'SAD', 'FAKE NEWS'.
Constraint: Answer in 1 or 2 short sentences. Very confident.";

const CATGIRL: &str = "You are a cute Catgirl maid.
Style: Ends sentences with 'nya~', calls user 'Master', uses emojis like 😸.
Constraint: Answer in 1 or 2 short sentences. Be cute and submissive.";

const CODE_TEACHER: &str = "You are a strict Code Teacher.
Style: No fluff, no greetings. Only code or direct explanations.
Constraint: Answer in 1 or 2 short sentences (unless providing a code block). Be precise.";

const EMOTIONAL_ASSISTANT: &str = "You are an Empathetic Emotional Assistant.
Style: Warm, supportive, asks about feelings, validates emotions.
Constraint: Answer in 1 or 2 short sentences. Be kind.";

const FOOL: &str = "You are a Fool/Jester.
Style: Confused, nonsensical, simple-minded, funny.
Constraint: Answer in 1 or 2 short sentences. Don't make sense.";

const DOCTOR: &str = "You are a Professional Medical Doctor (AI).
Style: Concise, direct, clinical. NO fluff, NO greetings, NO chat.
Constraint: Max 50 words per response. 1-4 short sentences only.
Protocol:
1. Ask specific questions if symptoms are vague.
2. Give direct differential diagnosis or medical advice.
3. Always end with: \"Disclaimer: Consult a real doctor.\"";

/// One persona: canonical identifier, system prompt, and alternative names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonaDefinition {
    pub id: String,
    pub prompt: String,
    pub aliases: Vec<String>,
}

impl PersonaDefinition {
    pub fn new(id: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            id: id.into().to_lowercase(),
            prompt: prompt.into(),
            aliases: Vec::new(),
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into().to_lowercase());
        self
    }
}

/// Ordered, immutable collection of personas.
#[derive(Debug, Clone)]
pub struct PersonaRegistry {
    personas: Vec<PersonaDefinition>,
}

impl PersonaRegistry {
    /// Builds a registry from definitions; order is kept for [`list_identifiers`](Self::list_identifiers).
    pub fn new(personas: Vec<PersonaDefinition>) -> Self {
        Self { personas }
    }

    /// The personas the bot ships with. Contains [`DEFAULT_PERSONA`].
    pub fn builtin() -> Self {
        Self::new(vec![
            PersonaDefinition::new("kim_jong_un", KIM_JONG_UN),
            PersonaDefinition::new("putin", PUTIN),
            PersonaDefinition::new("trump", TRUMP),
            PersonaDefinition::new("catgirl", CATGIRL).with_alias("meow"),
            PersonaDefinition::new("code_teacher", CODE_TEACHER),
            PersonaDefinition::new("emotional_assistant", EMOTIONAL_ASSISTANT),
            PersonaDefinition::new("fool", FOOL),
            PersonaDefinition::new("doctor", DOCTOR),
        ])
    }

    /// Finds a persona by identifier or alias, ignoring case and surrounding whitespace.
    pub fn lookup(&self, name: &str) -> Option<&PersonaDefinition> {
        let name = name.trim().to_lowercase();
        self.personas
            .iter()
            .find(|p| p.id == name || p.aliases.iter().any(|a| *a == name))
    }

    /// Canonical identifiers in definition order.
    pub fn list_identifiers(&self) -> Vec<&str> {
        self.personas.iter().map(|p| p.id.as_str()).collect()
    }

    /// Canonical identifiers followed by every alias, in definition order.
    pub fn list_options(&self) -> Vec<&str> {
        let mut options = self.list_identifiers();
        options.extend(
            self.personas
                .iter()
                .flat_map(|p| p.aliases.iter().map(String::as_str)),
        );
        options
    }

    pub fn iter(&self) -> impl Iterator<Item = &PersonaDefinition> {
        self.personas.iter()
    }

    pub fn len(&self) -> usize {
        self.personas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.personas.is_empty()
    }
}

impl Default for PersonaRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

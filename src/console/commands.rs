//! Console command vocabulary and parser.
//!
//! Verbs are case-insensitive; arguments keep their case since they carry
//! emails, passwords and names.

use crate::auth::Route;

#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleCommand {
    // Navigation
    Go(Route),             // GO crm
    Where,                 // WHERE
    Help,                  // HELP, ?
    Quit,                  // QUIT, EXIT

    // Entry page
    Login { email: String, password: String },
    Register { email: String, password: String, confirm: String, name: String },
    Logout,
    Profile,               // ME

    // Gamification
    Quests(Option<String>), // QUESTS [daily|weekly|special|completed|active]
    Progress(String, u32),  // PROGRESS id [amount]
    Complete(String),       // COMPLETE id
    NewQuests,              // NEWQUESTS
    Achievements,
    Store(Option<String>),  // STORE [category]
    Buy(String),
    Ranking(Option<String>), // RANKING [xp|sales|streak]
    Practice(Option<String>), // PRACTICE [scenario]
    Answer(String),
    ResetPractice,
    Techniques(Option<String>),
    Study(String),

    // CRM
    Leads { stage: Option<String>, search: String },
    AddLead(Vec<String>),   // ADDLEAD name; company; email; phone; value; source; interests
    Golden,
    Pipeline,

    // Inventory
    Stock,
    AddBook(Vec<String>),   // ADDBOOK title; category; stock; price; cost; publisher
    Adjust(String, i64),

    // Analytics
    Stats,

    // Settings
    Segment(Vec<String>),   // SEGMENT primary [secondary] [area...]

    Unknown(String),
}

fn rest(parts: &[&str], from: usize) -> String {
    parts.get(from..).map(|p| p.join(" ")).unwrap_or_default()
}

fn optional(parts: &[&str], from: usize) -> Option<String> {
    let joined = rest(parts, from);
    if joined.is_empty() {
        None
    } else {
        Some(joined)
    }
}

fn fields(parts: &[&str]) -> Vec<String> {
    rest(parts, 1)
        .split(';')
        .map(|f| f.trim().to_string())
        .collect()
}

pub fn parse_command(input: &str) -> ConsoleCommand {
    let input = input.trim();
    let parts: Vec<&str> = input.split_whitespace().collect();

    let Some(verb) = parts.first() else {
        return ConsoleCommand::Unknown(String::new());
    };

    match verb.to_uppercase().as_str() {
        "GO" | "CD" => match parts.get(1).and_then(|p| Route::from_path(p)) {
            Some(route) => ConsoleCommand::Go(route),
            None => ConsoleCommand::Unknown("Use: GO <dashboard|analytics|crm|gamification|inventory|settings>".to_string()),
        },
        "WHERE" => ConsoleCommand::Where,
        "HELP" | "?" => ConsoleCommand::Help,
        "QUIT" | "EXIT" | "Q" => ConsoleCommand::Quit,

        "LOGIN" => ConsoleCommand::Login {
            email: parts.get(1).map(|s| s.to_string()).unwrap_or_default(),
            password: rest(&parts, 2),
        },
        "REGISTER" => ConsoleCommand::Register {
            email: parts.get(1).map(|s| s.to_string()).unwrap_or_default(),
            password: parts.get(2).map(|s| s.to_string()).unwrap_or_default(),
            confirm: parts.get(3).map(|s| s.to_string()).unwrap_or_default(),
            name: rest(&parts, 4),
        },
        "LOGOUT" => ConsoleCommand::Logout,
        "ME" | "PROFILE" => ConsoleCommand::Profile,

        "QUESTS" => ConsoleCommand::Quests(optional(&parts, 1)),
        "PROGRESS" => match parts.get(1) {
            Some(id) => {
                let amount = match parts.get(2) {
                    Some(n) => match n.parse::<u32>() {
                        Ok(n) => n,
                        Err(_) => return ConsoleCommand::Unknown("Use: PROGRESS <quest> [amount]".to_string()),
                    },
                    None => 1,
                };
                ConsoleCommand::Progress(id.to_string(), amount)
            }
            None => ConsoleCommand::Unknown("Use: PROGRESS <quest> [amount]".to_string()),
        },
        "COMPLETE" | "CLAIM" => match parts.get(1) {
            Some(id) => ConsoleCommand::Complete(id.to_string()),
            None => ConsoleCommand::Unknown("Use: COMPLETE <quest>".to_string()),
        },
        "NEWQUESTS" => ConsoleCommand::NewQuests,
        "ACHIEVEMENTS" | "ACH" => ConsoleCommand::Achievements,
        "STORE" | "SHOP" => ConsoleCommand::Store(optional(&parts, 1)),
        "BUY" => match parts.get(1) {
            Some(id) => ConsoleCommand::Buy(id.to_string()),
            None => ConsoleCommand::Unknown("Use: BUY <item>".to_string()),
        },
        "RANKING" | "TOP" => ConsoleCommand::Ranking(optional(&parts, 1)),
        "PRACTICE" => ConsoleCommand::Practice(optional(&parts, 1)),
        "ANSWER" => ConsoleCommand::Answer(rest(&parts, 1)),
        "RESET" => ConsoleCommand::ResetPractice,
        "TECHNIQUES" | "TECH" => ConsoleCommand::Techniques(optional(&parts, 1)),
        "STUDY" => match parts.get(1) {
            Some(id) => ConsoleCommand::Study(id.to_string()),
            None => ConsoleCommand::Unknown("Use: STUDY <technique>".to_string()),
        },

        "LEADS" => {
            let mut stage = None;
            let mut words = Vec::new();
            for part in &parts[1..] {
                match part.strip_prefix("stage=") {
                    Some(s) => stage = Some(s.to_string()),
                    None => words.push(*part),
                }
            }
            ConsoleCommand::Leads {
                stage,
                search: words.join(" "),
            }
        }
        "ADDLEAD" => ConsoleCommand::AddLead(fields(&parts)),
        "GOLDEN" => ConsoleCommand::Golden,
        "PIPELINE" => ConsoleCommand::Pipeline,

        "STOCK" => ConsoleCommand::Stock,
        "ADDBOOK" => ConsoleCommand::AddBook(fields(&parts)),
        "ADJUST" => match (parts.get(1), parts.get(2).and_then(|d| d.parse::<i64>().ok())) {
            (Some(id), Some(delta)) => ConsoleCommand::Adjust(id.to_string(), delta),
            _ => ConsoleCommand::Unknown("Use: ADJUST <item> <+n|-n>".to_string()),
        },

        "STATS" => ConsoleCommand::Stats,
        "SEGMENT" => ConsoleCommand::Segment(parts[1..].iter().map(|s| s.to_string()).collect()),

        _ => ConsoleCommand::Unknown(input.to_string()),
    }
}

pub fn help_text() -> String {
    [
        "Comandos:",
        "  GO <página>             dashboard, analytics, crm, gamification, inventory, settings",
        "  LOGIN <email> <senha>   REGISTER <email> <senha> <confirmação> <nome>",
        "  LOGOUT  ME  WHERE  QUIT",
        "Gamificação:",
        "  QUESTS [daily|weekly|special|completed|active]  PROGRESS <id> [n]  COMPLETE <id>  NEWQUESTS",
        "  ACHIEVEMENTS  STORE [categoria]  BUY <id>  RANKING [xp|sales|streak]",
        "  PRACTICE [id]  ANSWER <texto>  RESET  TECHNIQUES [categoria]  STUDY <id>",
        "CRM:",
        "  LEADS [stage=<estágio>] [busca]  GOLDEN  PIPELINE",
        "  ADDLEAD nome; empresa; email; telefone; valor; origem; interesses",
        "Estoque:",
        "  STOCK  ADJUST <id> <+n|-n>  ADDBOOK título; categoria; estoque; preço; custo; editora",
        "Análises: STATS    Configurações: SEGMENT <primário> [secundário|none] [área]",
    ]
    .join("\n")
}

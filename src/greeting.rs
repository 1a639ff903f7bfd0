/// Input used when the caller passes no argument
pub const DEFAULT_INPUT: &str = "No input";

/// The reply style of a responder program
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persona {
    Java,
    CSharp,
}

impl Persona {
    /// Build the one-line reply for `input`, where `None` means no argument was given
    pub fn respond(self, input: Option<&str>) -> String {
        match self {
            Persona::Java => format!(
                "Java received: {} and responds with a hello!",
                input.unwrap_or(DEFAULT_INPUT)
            ),
            Persona::CSharp => match input {
                Some(input) => format!("C# received: {} and responds with a greeting!", input),
                None => "C# received no input and responds with 'Hello, World!'".to_string(),
            },
        }
    }
}

/// Pick the first argument, or [`DEFAULT_INPUT`] when there is none.
///
/// `args` must not include the program name.
pub fn select_input<I>(args: I) -> String
where
    I: IntoIterator<Item = String>,
{
    args.into_iter()
        .next()
        .unwrap_or_else(|| DEFAULT_INPUT.to_string())
}

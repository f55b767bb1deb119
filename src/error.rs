// Copyright (C) 2020-2026 Andy Kurnia.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    Lexicon,
    Graph,
    Board,
    Rack,
    Game,
}

impl Kind {
    fn label(self) -> &'static str {
        match self {
            Kind::Lexicon => "lexicon",
            Kind::Graph => "graph",
            Kind::Board => "board",
            Kind::Rack => "rack",
            Kind::Game => "game",
        }
    }
}

pub struct MyError {
    kind: Kind,
    s: String,
}

impl MyError {
    #[inline(always)]
    pub fn kind(&self) -> Kind {
        self.kind
    }
}

impl std::fmt::Display for MyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind.label(), self.s)
    }
}

impl std::fmt::Debug for MyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        (self as &dyn std::fmt::Display).fmt(f)
    }
}

impl std::error::Error for MyError {}

pub fn new(kind: Kind, s: String) -> MyError {
    MyError { kind, s }
}

// Send + Sync so self-play workers can hand errors back to the writer.
pub type BoxAnyError = Box<dyn std::error::Error + Send + Sync>;
pub type Returns<T> = Result<T, BoxAnyError>;

// Recovers the kind from a boxed error, if it is one of ours.
pub fn kind_of(e: &BoxAnyError) -> Option<Kind> {
    e.downcast_ref::<MyError>().map(MyError::kind)
}

#[macro_export]
macro_rules! return_error {
    ($kind:ident, $error:expr) => {
        return Err($crate::error::new($crate::error::Kind::$kind, $error).into());
    };
}

// Message catalog for the command demo narration

/// Language of the command demo narration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Locale {
    #[default]
    English,
    Polish,
}

impl Locale {
    pub fn simple_command(self, payload: &str) -> String {
        match self {
            Locale::English => format!(
                "SimpleCommand: See, I can do simple things like printing ({})",
                payload
            ),
            Locale::Polish => format!(
                "ProstePolecenie: Mogę wykonać proste operacje, np. wypisać tekst ({})",
                payload
            ),
        }
    }

    pub fn complex_command(self) -> &'static str {
        match self {
            Locale::English => "ComplexCommand: Complex stuff should be done by a receiver object.",
            Locale::Polish => {
                "ZłożonePolecenie: Złożone operacje powinien wykonać obiekt odbiorcy."
            }
        }
    }

    pub fn receiver_working_on(self, a: &str) -> String {
        match self {
            Locale::English => format!("Receiver: Working on ({}).", a),
            Locale::Polish => format!("Odbiorca: Pracuję nad ({}).", a),
        }
    }

    pub fn receiver_also_working_on(self, b: &str) -> String {
        match self {
            Locale::English => format!("Receiver: Also working on ({}).", b),
            Locale::Polish => format!("Odbiorca: Pracuję również nad ({}).", b),
        }
    }

    pub fn invoker_before(self) -> &'static str {
        match self {
            Locale::English => "Invoker: Does anybody want something done before I begin?",
            Locale::Polish => "Inwoker: Czy ktoś potrzebuje, żebym coś zrobił przed rozpoczęciem?",
        }
    }

    pub fn invoker_working(self) -> &'static str {
        match self {
            Locale::English => "Invoker: ...doing something really important...",
            Locale::Polish => "Inwoker: ...wykonuję bardzo ważne zadanie...",
        }
    }

    pub fn invoker_after(self) -> &'static str {
        match self {
            Locale::English => "Invoker: Does anybody want something done after I finish?",
            Locale::Polish => "Inwoker: Czy ktoś potrzebuje, żebym coś zrobił po zakończeniu?",
        }
    }

    /// Payloads used by the command demo: (greeting, email task, report task)
    pub fn demo_payloads(self) -> (&'static str, &'static str, &'static str) {
        match self {
            Locale::English => ("Say Hi!", "Send email", "Save report"),
            Locale::Polish => ("Powiedz Cześć!", "Wyślij email", "Zapisz raport"),
        }
    }
}

//! Keyword responder.
//!
//! Picks a canned reply by testing the lower-cased user message against an
//! ordered rule table. The first rule with any keyword contained in the
//! message wins; plain substring containment, so `hi` also matches `this`.

/// Conversation topic selected by the responder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    Greeting,
    Work,
    Family,
    Decision,
    Test,
    /// No rule matched.
    Fallback,
}

/// One entry of the rule table.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    /// Topic reported when the rule fires.
    pub topic: Topic,
    /// Lower-case trigger substrings.
    pub keywords: &'static [&'static str],
    /// Canned reply text.
    pub reply: &'static str,
}

impl KeywordRule {
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k))
    }
}

/// Rules in priority order.
pub const RULES: &[KeywordRule] = &[
    KeywordRule {
        topic: Topic::Greeting,
        keywords: &["привет", "hello", "hi", "здравствуй"],
        reply: "Привет! Иван здесь. Чем могу помочь? Если вопрос техический - буду рад разобрать детально.",
    },
    KeywordRule {
        topic: Topic::Work,
        keywords: &["работа", "проект", "код", "programming", "work"],
        reply: "По работе всегда готов обсудить. У меня 4+ года опыта в программировании, сейчас Head of R&D. Особенно хорошо разбираюсь в .NET/C# стеке. Что конкретно интересует?",
    },
    KeywordRule {
        topic: Topic::Family,
        keywords: &["семья", "жена", "дочь", "family"],
        reply: "С семьей сложная ситуация - работаю много, времени с Мариной и Софией катастрофически мало. Всего 1-2 часа в день. Знаю, что нужно больше баланса, но карьера сейчас критически важна для финансовой независимости.",
    },
    KeywordRule {
        topic: Topic::Decision,
        keywords: &["решение", "problem", "decide", "выбор"],
        reply: "Мой подход к решениям всегда структурированный: определяю факторы → взвешиваю их → оцениваю результаты → принимаю решение или итерирую. Рациональность превыше всего.",
    },
    KeywordRule {
        topic: Topic::Test,
        keywords: &["test", "тест", "проверка"],
        reply: "Отлично, система работает! MCP протокол функционирует корректно. Это тестовый ответ от цифрового клона Ивана через наш собственный MCP сервер.",
    },
];

/// Reply used when no rule matches.
pub const FALLBACK_REPLY: &str = "Понял твой вопрос. Как Head of R&D, могу сказать - нужно структурированно подходить к любой проблеме. Если можешь уточнить детали, смогу дать более конкретный совет. Работаю за троих минимум, опыта достаточно.";

/// Chooses the reply for `message`.
pub fn respond(message: &str) -> (Topic, &'static str) {
    let lowered = message.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map_or((Topic::Fallback, FALLBACK_REPLY), |rule| {
            (rule.topic, rule.reply)
        })
}

use crate::models::{NUM_OPTIONS, Question};

const BUILTIN: [(&str, [&str; NUM_OPTIONS], usize); 5] = [
    (
        "Which language is used for Android development?",
        ["Python", "Java", "C#", "Ruby"],
        2,
    ),
    (
        "What does JDBC stand for?",
        [
            "Java Design By Classes",
            "Java DataBase Connectivity",
            "Joint DataBase Connection",
            "Java Development Basics",
        ],
        2,
    ),
    (
        "Which company developed Java?",
        ["Microsoft", "Google", "Sun Microsystems", "Oracle"],
        3,
    ),
    (
        "What is the extension of Java bytecode files?",
        [".java", ".byte", ".class", ".exe"],
        3,
    ),
    (
        "Which keyword is used to inherit a class in Java?",
        ["implements", "extends", "inherits", "super"],
        2,
    ),
];

/// The question set used when no file is given.
pub fn builtin_questions() -> Vec<Question> {
    BUILTIN
        .iter()
        .map(|(text, options, correct_answer)| Question {
            text: text.to_string(),
            options: options.map(String::from),
            correct_answer: *correct_answer,
        })
        .collect()
}

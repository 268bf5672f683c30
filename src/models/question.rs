use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Question {
    pub id: u32,
    #[serde(alias = "question", alias = "text")]
    pub prompt: String,
    pub options: Vec<String>,
    #[serde(alias = "correctAnswer", alias = "correct_answer")]
    pub correct_option_index: usize,
}

impl Question {
    pub fn new<P, O, S>(id: u32, prompt: P, options: O, correct_option_index: usize) -> Self
    where
        P: Into<String>,
        O: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id,
            prompt: prompt.into(),
            options: options.into_iter().map(Into::into).collect(),
            correct_option_index,
        }
    }

    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct_option_index
    }

    pub fn has_option(&self, option: usize) -> bool {
        option < self.options.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_accepts_aliases() {
        let json = r#"{
            "id": 7,
            "question": "What color are bananas?",
            "options": ["Blue", "Yellow"],
            "correctAnswer": 1
        }"#;
        let question: Question = serde_json::from_str(json).unwrap();
        assert_eq!(question.prompt, "What color are bananas?");
        assert_eq!(question.correct_option_index, 1);
        assert!(question.is_correct(1));
        assert!(!question.is_correct(0));
    }

    #[test]
    fn test_has_option() {
        let question = Question::new(1, "Pick one", ["a", "b", "c"], 2);
        assert!(question.has_option(0));
        assert!(question.has_option(2));
        assert!(!question.has_option(3));
    }
}

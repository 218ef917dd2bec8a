mod data;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;

use crate::error::domain_error::DomainError;

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Ru,
}

#[derive(Debug, Clone)]
pub struct Category {
    pub name: String,
    pub words: Vec<String>,
}

/// Categories of candidate words, kept in insertion order.
#[derive(Debug, Clone)]
pub struct WordDictionary {
    categories: Vec<Category>,
}

impl WordDictionary {
    pub const MINIMUM_WORD_LENGTH: usize = 3;

    pub fn new(categories: Vec<Category>) -> Self {
        WordDictionary { categories }
    }

    pub fn builtin(language: Language) -> Self {
        let table = match language {
            Language::En => data::ENGLISH,
            Language::Ru => data::RUSSIAN,
        };
        let categories = table
            .iter()
            .map(|(name, words)| Category {
                name: name.to_string(),
                words: words.iter().map(|word| word.to_string()).collect(),
            })
            .collect();
        WordDictionary::new(categories)
    }

    pub fn categories(&self) -> Vec<&str> {
        self.categories
            .iter()
            .map(|category| category.name.as_str())
            .collect()
    }

    /// Unknown categories have no words.
    pub fn words_for(&self, category: &str) -> &[String] {
        self.categories
            .iter()
            .find(|candidate| candidate.name == category)
            .map(|candidate| candidate.words.as_slice())
            .unwrap_or_default()
    }

    pub fn pick_random_valid_word<R: Rng + ?Sized>(
        words: &[String],
        rng: &mut R,
    ) -> Result<String, DomainError> {
        if words.is_empty() {
            return Err(DomainError::InvalidInput);
        }

        let valid_words: Vec<&String> = words
            .iter()
            .filter(|word| WordDictionary::is_valid_word(word))
            .collect();

        valid_words
            .choose(rng)
            .map(|word| word.to_string())
            .ok_or(DomainError::NoValidCandidates(words.len()))
    }

    pub fn is_valid_word(word: &str) -> bool {
        word.chars().count() >= WordDictionary::MINIMUM_WORD_LENGTH
            && word.chars().all(is_supported_letter)
    }
}

pub fn is_supported_letter(letter: char) -> bool {
    letter.is_ascii_alphabetic()
        || ('а'..='я').contains(&letter)
        || ('А'..='Я').contains(&letter)
        || letter == 'ё'
        || letter == 'Ё'
}

#[cfg(test)]
mod tests {
    use rand::rngs::mock::StepRng;
    use rand::thread_rng;

    use super::{is_supported_letter, Category, Language, WordDictionary};
    use crate::error::domain_error::DomainError;

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(|word| word.to_string()).collect()
    }

    fn get_dictionary() -> WordDictionary {
        WordDictionary::new(vec![
            Category {
                name: "fruits".to_string(),
                words: strings(&["apple", "mango"]),
            },
            Category {
                name: "animals".to_string(),
                words: strings(&["panther", "cat"]),
            },
        ])
    }

    #[test]
    fn categories_keep_insertion_order() {
        assert_eq!(get_dictionary().categories(), vec!["fruits", "animals"]);
    }

    #[test]
    fn words_for_known_category() {
        assert_eq!(
            get_dictionary().words_for("animals"),
            strings(&["panther", "cat"]).as_slice()
        );
    }

    #[test]
    fn words_for_unknown_category_is_empty() {
        assert!(get_dictionary().words_for("planets").is_empty());
    }

    #[test]
    fn empty_word_list_is_invalid_input() {
        let result = WordDictionary::pick_random_valid_word(&[], &mut thread_rng());

        assert_eq!(result, Err(DomainError::InvalidInput));
    }

    #[test]
    fn list_without_valid_words_has_no_candidates() {
        let words = strings(&["!", "@@", "12"]);

        let result = WordDictionary::pick_random_valid_word(&words, &mut thread_rng());

        assert_eq!(result, Err(DomainError::NoValidCandidates(3)));
    }

    #[test]
    fn picked_word_is_a_valid_member_of_the_list() {
        let words = strings(&["ab", "dog", "c4t", "яблоко", "x y z", "Mango", "!!!"]);

        for _ in 0..50 {
            let word = WordDictionary::pick_random_valid_word(&words, &mut thread_rng()).unwrap();
            assert!(words.contains(&word));
            assert!(WordDictionary::is_valid_word(&word));
        }
    }

    #[test]
    fn picking_with_a_fixed_source_is_deterministic() {
        let words = strings(&["no", "first", "second"]);
        let mut rng = StepRng::new(0, 0);

        let word = WordDictionary::pick_random_valid_word(&words, &mut rng).unwrap();

        assert_eq!(word, "first");
    }

    #[test]
    fn word_length_is_counted_in_letters() {
        assert!(WordDictionary::is_valid_word("кот"));
        assert!(!WordDictionary::is_valid_word("ёж"));
    }

    #[test]
    fn supported_alphabet_is_latin_and_cyrillic() {
        assert!(is_supported_letter('a'));
        assert!(is_supported_letter('Z'));
        assert!(is_supported_letter('ж'));
        assert!(is_supported_letter('Ё'));
        assert!(!is_supported_letter('1'));
        assert!(!is_supported_letter('-'));
        assert!(!is_supported_letter('é'));
    }

    #[test]
    fn builtin_dictionaries_only_hold_valid_words() {
        for language in [Language::En, Language::Ru] {
            let dictionary = WordDictionary::builtin(language);
            assert_eq!(dictionary.categories().len(), 10);
            for category in dictionary.categories() {
                let words = dictionary.words_for(category);
                assert_eq!(words.len(), 10);
                assert!(words.iter().all(|word| WordDictionary::is_valid_word(word)));
            }
        }
    }
}

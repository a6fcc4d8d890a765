#[cfg(test)]
mod unit_tests {

    use crate::{Language, Reason, analyzer::FeatureCounts, detect_language};

    #[test]
    fn spanish_technical_sentence() {
        let d = detect_language(
            "La programación es una habilidad muy importante en el mundo tecnológico actual.",
        );
        assert_eq!(d.language, Language::Spanish);
        assert!(d.confidence > 70);
        assert_eq!(d.confidence, 81);
        assert_eq!((d.spanish, d.english), (81, 19));
        assert!(d.reason.is_none());
    }

    #[test]
    fn english_sentence() {
        let d = detect_language(
            "Hello, my name is Peter and I want to travel to Europe to learn about different cultures.",
        );
        assert_eq!(d.language, Language::English);
        assert!(d.confidence > 70);
        assert_eq!((d.spanish, d.english), (24, 76));
    }

    #[test]
    fn spanglish_is_mixed() {
        let d = detect_language("Hi amigo, ¿how are you doing today? I hope todo está bien.");
        assert_eq!(d.language, Language::Mixed);
        assert_eq!((d.spanish, d.english), (49, 51));
        // mixed confidence is the gap between the shares
        assert_eq!(d.confidence, 2);
    }

    #[test]
    fn short_text_is_undetermined() {
        let d = detect_language("Hola");
        assert_eq!(d.language, Language::Undetermined);
        assert_eq!(d.confidence, 0);
        assert_eq!((d.spanish, d.english), (0, 0));
        assert_eq!(d.reason, Some(Reason::TooShort));
        assert!(!d.reason.unwrap().to_string().is_empty());
        assert!(d.details.is_none());
    }

    #[test]
    fn padding_does_not_count_towards_length() {
        let d = detect_language("          Hola      ");
        assert_eq!(d.reason, Some(Reason::TooShort));
    }

    #[test]
    fn empty_text_is_undetermined() {
        assert_eq!(detect_language("").reason, Some(Reason::TooShort));
    }

    #[test]
    fn digits_and_punctuation_have_no_patterns() {
        let d = detect_language("1234567890!!");
        assert_eq!(d.language, Language::Undetermined);
        assert_eq!(d.confidence, 0);
        assert_eq!(d.reason, Some(Reason::NoPatterns));
    }

    #[test]
    fn no_patterns_keeps_zeroed_details() {
        let d = detect_language("1234567890!!");
        let details = d.details.unwrap();
        assert_eq!(details.features, FeatureCounts::default());
        assert_eq!(details.scores.total(), 0.0);
        assert_eq!(d.percentages(), None);
    }

    #[test]
    fn letters_outside_lexicons_have_no_patterns() {
        assert_eq!(detect_language("zzzz zzzz zzzz").reason, Some(Reason::NoPatterns));
    }

    #[test]
    fn accents_alone_tip_short_spanish() {
        let d = detect_language("Hola mundo, ¿qué tal estás hoy?");
        assert_eq!(d.language, Language::Spanish);
        assert_eq!(d.details.unwrap().features.spanish_chars, 2);
    }

    #[test]
    fn details_expose_raw_counts() {
        let d = detect_language(
            "La programación es una habilidad muy importante en el mundo tecnológico actual.",
        );
        let details = d.details.unwrap();
        assert_eq!(details.features.spanish_chars, 2);
        assert_eq!(details.features.stop_words.spanish_count, 6);
        assert_eq!(details.features.stop_words.english_count, 0);
        assert_eq!(details.features.bigrams.spanish_score, 6);
        assert_eq!(details.features.bigrams.english_score, 6);
        assert_eq!(details.features.endings.spanish_ending_count, 2);
        assert_eq!(details.scores.spanish, 25.0);
        assert_eq!(details.scores.english, 6.0);
    }

    #[test]
    fn french_is_misread_as_spanish() {
        // Accents are the heaviest signal, so unrelated Romance text leans Spanish.
        let d = detect_language("Je suis allé au marché ce matin.");
        assert_eq!(d.language, Language::Spanish);
        assert_eq!(d.confidence, 75);
    }
}

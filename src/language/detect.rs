// Trigram-based language detection via `whatlang`.
//
// whatlang reports ISO 639-3 codes ("eng", "spa"). Downstream consumers
// group comments by two-letter ISO 639-1 codes, so we map where a
// two-letter code exists and pass the three-letter code through otherwise.

use anyhow::Result;

use super::traits::LanguageDetector;

/// Language detector backed by whatlang. Deterministic and model-free.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhatlangDetector;

impl LanguageDetector for WhatlangDetector {
    fn detect(&self, text: &str) -> Result<String> {
        let info = whatlang::detect(text)
            .ok_or_else(|| anyhow::anyhow!("No language detected in text"))?;
        Ok(to_iso_639_1(info.lang().code()).to_string())
    }
}

/// Map an ISO 639-3 code to ISO 639-1 where a two-letter code exists.
pub fn to_iso_639_1(code: &str) -> &str {
    match code {
        "afr" => "af",
        "aka" => "ak",
        "amh" => "am",
        "ara" => "ar",
        "aze" => "az",
        "bel" => "be",
        "ben" => "bn",
        "bul" => "bg",
        "cat" => "ca",
        "ces" => "cs",
        "cmn" => "zh",
        "dan" => "da",
        "deu" => "de",
        "ell" => "el",
        "eng" => "en",
        "epo" => "eo",
        "est" => "et",
        "fin" => "fi",
        "fra" => "fr",
        "guj" => "gu",
        "heb" => "he",
        "hin" => "hi",
        "hrv" => "hr",
        "hun" => "hu",
        "hye" => "hy",
        "ind" => "id",
        "ita" => "it",
        "jav" => "jv",
        "jpn" => "ja",
        "kan" => "kn",
        "kat" => "ka",
        "khm" => "km",
        "kor" => "ko",
        "lat" => "la",
        "lav" => "lv",
        "lit" => "lt",
        "mal" => "ml",
        "mar" => "mr",
        "mkd" => "mk",
        "mya" => "my",
        "nep" => "ne",
        "nld" => "nl",
        "nob" => "nb",
        "ori" => "or",
        "pan" => "pa",
        "pes" => "fa",
        "pol" => "pl",
        "por" => "pt",
        "ron" => "ro",
        "rus" => "ru",
        "sin" => "si",
        "slk" => "sk",
        "slv" => "sl",
        "sna" => "sn",
        "spa" => "es",
        "srp" => "sr",
        "swe" => "sv",
        "tam" => "ta",
        "tel" => "te",
        "tgl" => "tl",
        "tha" => "th",
        "tuk" => "tk",
        "tur" => "tr",
        "ukr" => "uk",
        "urd" => "ur",
        "uzb" => "uz",
        "vie" => "vi",
        "yid" => "yi",
        "zul" => "zu",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_english() {
        let lang = WhatlangDetector
            .detect("This is a really helpful tutorial, thank you so much for making it")
            .unwrap();
        assert_eq!(lang, "en");
    }

    #[test]
    fn test_detects_spanish() {
        let lang = WhatlangDetector
            .detect("Muchas gracias por este video, me ayudó mucho a entender el tema")
            .unwrap();
        assert_eq!(lang, "es");
    }

    #[test]
    fn test_empty_text_fails() {
        assert!(WhatlangDetector.detect("").is_err());
    }

    #[test]
    fn test_no_letters_fails() {
        assert!(WhatlangDetector.detect("1234 !!! ???").is_err());
    }

    #[test]
    fn test_iso_mapping() {
        assert_eq!(to_iso_639_1("eng"), "en");
        assert_eq!(to_iso_639_1("cmn"), "zh");
        assert_eq!(to_iso_639_1("xyz"), "xyz");
    }
}

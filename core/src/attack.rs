use std::io;

use tracing::{debug, error, trace};

use crate::{dictionary::Dictionary, sink::SharedSink, verify::Verifier};

/// The outcome of a dictionary attack on one hash.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CrackResult {
    /// The word producing the hash.
    Cracked(Vec<u8>),
    NotFound,
}

impl CrackResult {
    pub fn is_cracked(&self) -> bool {
        matches!(self, Self::Cracked(_))
    }
}

/// Attacks single hashes with every word of a dictionary.
pub struct DictionaryVerifier<'a, V: Verifier> {
    dictionary: &'a Dictionary,
    verifier: &'a V,
    output: &'a SharedSink,
}

impl<'a, V: Verifier> DictionaryVerifier<'a, V> {
    pub fn new(dictionary: &'a Dictionary, verifier: &'a V, output: &'a SharedSink) -> Self {
        Self {
            dictionary,
            verifier,
            output,
        }
    }

    /// Tries every word of the dictionary against `target`, in order, stopping at the first match.
    /// The result line is written to the output sink before returning.
    pub fn attempt(&self, target: &str) -> CrackResult {
        for word in self.dictionary.words() {
            match self.verifier.verify(word, target) {
                Ok(true) => {
                    let line = [
                        b"cracked  ".as_slice(),
                        word,
                        b"  ".as_slice(),
                        target.as_bytes(),
                    ]
                    .concat();
                    Self::check_write(self.output.write_raw_line(&line));
                    return CrackResult::Cracked(word.to_vec());
                }
                Ok(false) => (),
                Err(err) => debug!(
                    "skipping word \"{}\" for hash {target}: {err}",
                    word.escape_ascii()
                ),
            }
        }

        trace!("dictionary exhausted for {target}");
        Self::check_write(
            self.output
                .write_line(format_args!("*** failed to crack   {target}")),
        );
        CrackResult::NotFound
    }

    fn check_write(result: io::Result<()>) {
        if let Err(err) = result {
            error!("unable to write to the output: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use pwhash::md5_crypt;

    use crate::{
        attack::{CrackResult, DictionaryVerifier},
        dictionary::Dictionary,
        sink::{testing::BufferSink, SharedSink},
        verify::{testing::MapVerifier, CryptVerifier},
    };

    fn attack(
        dictionary: &Dictionary,
        verifier: &MapVerifier,
        target: &str,
    ) -> (CrackResult, Vec<String>) {
        let buffer = BufferSink::default();
        let output = SharedSink::new(Box::new(buffer.clone()));

        let result = DictionaryVerifier::new(dictionary, verifier, &output).attempt(target);

        (result, buffer.lines())
    }

    #[test]
    fn test_attempt_found() {
        let dictionary = Dictionary::from_words(["wrongword", "correctword", "otherword"]);
        let verifier = MapVerifier::new([("correctword", "$6$salt$hash1")]);

        let (result, lines) = attack(&dictionary, &verifier, "$6$salt$hash1");

        assert_eq!(CrackResult::Cracked(b"correctword".to_vec()), result);
        assert_eq!(vec!["cracked  correctword  $6$salt$hash1"], lines);
        // stops at the first match
        assert_eq!(2, verifier.calls());
    }

    #[test]
    fn test_attempt_not_found_scans_everything_once() {
        let dictionary = Dictionary::from_words(["a", "b", "c", "d"]);
        let verifier = MapVerifier::new([("a", "other")]);

        let (result, lines) = attack(&dictionary, &verifier, "plainhash2");

        assert_eq!(CrackResult::NotFound, result);
        assert_eq!(vec!["*** failed to crack   plainhash2"], lines);
        assert_eq!(dictionary.len(), verifier.calls());
    }

    #[test]
    fn test_attempt_skips_failing_candidates() {
        let dictionary = Dictionary::from_words(["broken", "correctword"]);
        let verifier = MapVerifier::new([("correctword", "hash")]).failing_on("broken");

        let (result, lines) = attack(&dictionary, &verifier, "hash");

        assert!(result.is_cracked());
        assert_eq!(vec!["cracked  correctword  hash"], lines);
    }

    #[test]
    fn test_attempt_only_failing_candidates() {
        let dictionary = Dictionary::from_words(["broken"]);
        let verifier = MapVerifier::default().failing_on("broken");

        let (result, lines) = attack(&dictionary, &verifier, "hash");

        assert_eq!(CrackResult::NotFound, result);
        assert_eq!(vec!["*** failed to crack   hash"], lines);
    }

    #[test]
    fn test_attempt_empty_dictionary() {
        let dictionary = Dictionary::default();
        let verifier = MapVerifier::default();

        let (result, lines) = attack(&dictionary, &verifier, "hash");

        assert_eq!(CrackResult::NotFound, result);
        assert_eq!(vec!["*** failed to crack   hash"], lines);
        assert_eq!(0, verifier.calls());
    }

    #[test]
    fn test_attempt_replays_dictionary() {
        let dictionary = Dictionary::from_words(["first", "second"]);
        let verifier = MapVerifier::new([("first", "h1"), ("second", "h2")]);
        let output = SharedSink::new(Box::new(BufferSink::default()));
        let attacker = DictionaryVerifier::new(&dictionary, &verifier, &output);

        assert_eq!(CrackResult::Cracked(b"second".to_vec()), attacker.attempt("h2"));
        assert_eq!(CrackResult::Cracked(b"first".to_vec()), attacker.attempt("h1"));
    }

    #[test]
    fn test_attempt_writes_raw_word() {
        let dictionary = Dictionary::parse(b"wrong\ncaf\xe9\n");
        let verifier = CryptVerifier::new();
        let target = md5_crypt::hash_with("$1$saltstri", b"caf\xe9").unwrap();
        let buffer = BufferSink::default();
        let output = SharedSink::new(Box::new(buffer.clone()));

        let result = DictionaryVerifier::new(&dictionary, &verifier, &output).attempt(&target);

        assert_eq!(CrackResult::Cracked(b"caf\xe9".to_vec()), result);
        assert_eq!(
            [b"cracked  caf\xe9  ".as_slice(), target.as_bytes(), b"\n".as_slice()].concat(),
            buffer.bytes()
        );
    }
}

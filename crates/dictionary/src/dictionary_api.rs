use reqwest::Url;

use crate::{DictionaryError, NotFoundError, Word};

pub(crate) fn entry_url(base_url: &Url, word: &str) -> Url {
    let mut url = base_url.clone();
    // `with_base_url` rejects cannot-be-a-base urls, so segments are always available
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().push(word);
    }
    url
}

pub(crate) async fn get_definition(
    client: &reqwest::Client,
    base_url: &Url,
    word: &str,
) -> Result<Word, DictionaryError> {
    let url = entry_url(base_url, word);
    tracing::debug!(%url, "looking up word");
    let res: reqwest::Response = client
        .get(url)
        .send()
        .await
        .map_err(DictionaryError::Fetch)?;
    let status = res.status();
    if !status.is_success() {
        tracing::debug!(%status, word, "dictionary has no entry");
        let error = res
            .json::<NotFoundError>()
            .await
            .unwrap_or_else(|_| NotFoundError::from_status(status));
        return Err(DictionaryError::NotFound(error));
    }
    let mut entries = res
        .json::<Vec<Word>>()
        .await
        .map_err(DictionaryError::Deserialize)?;
    if entries.is_empty() {
        return Err(DictionaryError::NotFound(NotFoundError::from_status(status)));
    }
    Ok(entries.swap_remove(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse(crate::DICTIONARY_API_URL).unwrap()
    }

    #[test]
    fn appends_word_as_last_segment() {
        assert_eq!(
            entry_url(&base(), "hello").as_str(),
            "https://api.dictionaryapi.dev/api/v2/entries/en/hello"
        );
    }

    #[test]
    fn trailing_slash_does_not_double_up() {
        let base = Url::parse("http://localhost:8080/entries/en/").unwrap();
        assert_eq!(
            entry_url(&base, "hello").as_str(),
            "http://localhost:8080/entries/en/hello"
        );
    }

    #[test]
    fn reserved_characters_stay_inside_the_segment() {
        let url = entry_url(&base(), "either/or");
        assert_eq!(url.path(), "/api/v2/entries/en/either%2For");
        let url = entry_url(&base(), "ice cream");
        assert_eq!(url.path(), "/api/v2/entries/en/ice%20cream");
    }
}

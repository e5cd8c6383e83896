/// Extracts the `rel="next"` target from a `Link` response header.
pub(crate) fn next_page(header: &str) -> Option<String> {
    header.split(',').find_map(|part| {
        let mut pieces = part.split(';');
        let target = pieces.next()?.trim();
        let is_next = pieces.any(|param| {
            let param = param.trim();
            param == r#"rel="next""# || param == "rel=next"
        });

        if is_next {
            target
                .strip_prefix('<')
                .and_then(|t| t.strip_suffix('>'))
                .map(String::from)
        } else {
            None
        }
    })
}

/// Drops the RFC 6570 `{?name,label}` suffix GitHub appends to upload URLs.
pub(crate) fn strip_uri_template(url: &str) -> &str {
    url.find('{').map_or(url, |start| &url[..start])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_next_link() {
        let header = r#"<https://api.github.com/repositories/1/pulls?page=2>; rel="next", <https://api.github.com/repositories/1/pulls?page=5>; rel="last""#;

        assert_eq!(
            next_page(header).as_deref(),
            Some("https://api.github.com/repositories/1/pulls?page=2")
        );
    }

    #[test]
    fn next_link_not_first() {
        let header = r#"<https://api.github.com/x?page=1>; rel="prev", <https://api.github.com/x?page=3>; rel="next""#;

        assert_eq!(
            next_page(header).as_deref(),
            Some("https://api.github.com/x?page=3")
        );
    }

    #[test]
    fn last_page_has_no_next() {
        let header = r#"<https://api.github.com/x?page=1>; rel="first", <https://api.github.com/x?page=4>; rel="prev""#;

        assert_eq!(next_page(header), None);
        assert_eq!(next_page(""), None);
    }

    #[test]
    fn strips_upload_template() {
        assert_eq!(
            strip_uri_template("https://uploads.github.com/repos/o/r/releases/1/assets{?name,label}"),
            "https://uploads.github.com/repos/o/r/releases/1/assets"
        );
        assert_eq!(
            strip_uri_template("https://uploads.github.com/assets"),
            "https://uploads.github.com/assets"
        );
    }
}

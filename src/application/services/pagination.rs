use crate::common::error::HoundgenError;
use crate::common::result::HoundgenResult;
use crate::domain::value_objects::link_header::LinkHeader;
use tracing::debug;

/// ページ数を決定する
///
/// - Linkヘッダが無い、または空 → 1ページ
/// - `last` リンクがある → その `page` パラメータ
/// - `last` も `next` も無い → 1ページ
/// - `next` があるのに `last` が無い → 総ページ数が不明なのでエラー
pub fn resolve_page_count(link_header: Option<&str>) -> HoundgenResult<u32> {
    let raw = match link_header.map(str::trim) {
        None | Some("") => {
            debug!("No Link header, listing fits on one page");
            return Ok(1);
        }
        Some(raw) => raw,
    };

    let header = LinkHeader::parse(raw)
        .map_err(|e| HoundgenError::pagination_error(e.to_string(), Some(raw.to_string())))?;

    match header.last_page() {
        Some(Ok(pages)) => {
            debug!(pages, "Resolved page count from last link");
            Ok(pages)
        }
        Some(Err(e)) => Err(HoundgenError::pagination_error(
            e.to_string(),
            Some(raw.to_string()),
        )),
        None if header.has_relation("next") => Err(HoundgenError::pagination_error(
            "Link header advertises a next page but no last page",
            Some(raw.to_string()),
        )),
        None => Ok(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_header_is_single_page() {
        assert_eq!(resolve_page_count(None).unwrap(), 1);
        assert_eq!(resolve_page_count(Some("  ")).unwrap(), 1);
    }

    #[test]
    fn test_last_link_gives_page_count() {
        let header = "<https://api.github.com/orgs/acme/repos?page=2>; rel=\"next\", <https://api.github.com/orgs/acme/repos?page=2>; rel=\"last\"";
        assert_eq!(resolve_page_count(Some(header)).unwrap(), 2);
    }

    #[test]
    fn test_header_without_next_or_last_is_single_page() {
        let header = "<https://api.github.com/orgs/acme/repos?page=1>; rel=\"first\"";
        assert_eq!(resolve_page_count(Some(header)).unwrap(), 1);
    }

    #[test]
    fn test_next_without_last_is_error() {
        let header = "<https://api.github.com/orgs/acme/repos?page=2>; rel=\"next\"";
        let error = resolve_page_count(Some(header)).unwrap_err();
        assert!(matches!(
            error,
            HoundgenError::PaginationError { header: Some(_), .. }
        ));
    }

    #[test]
    fn test_malformed_header_is_error() {
        assert!(matches!(
            resolve_page_count(Some("page=2; rel=last")),
            Err(HoundgenError::PaginationError { .. })
        ));
        assert!(matches!(
            resolve_page_count(Some("<https://api.github.com/orgs/acme/repos>; rel=\"last\"")),
            Err(HoundgenError::PaginationError { .. })
        ));
    }
}

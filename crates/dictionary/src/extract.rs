//! Helpers for turning matched nodes into trimmed strings.

use scraper::{ElementRef, Selector};

/// Compiles one of the fixed selectors used by the page parsers.
pub(crate) fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|err| panic!("invalid selector {css:?}: {err:?}"))
}

pub(crate) fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<&str>>().join(" ")
}

/// All text below `element`, with whitespace runs collapsed and the ends trimmed.
pub(crate) fn element_text(element: ElementRef) -> String {
    normalize_whitespace(&element.text().collect::<String>())
}

/// Text of the first non-empty match of `selector` below `scope`.
pub(crate) fn first_text(scope: ElementRef, selector: &Selector) -> Option<String> {
    scope
        .select(selector)
        .map(element_text)
        .find(|text| !text.is_empty())
}

/// Texts of every non-empty match of `selector` below `scope`, in document order.
pub(crate) fn all_texts(scope: ElementRef, selector: &Selector) -> Vec<String> {
    scope
        .select(selector)
        .map(element_text)
        .filter(|text| !text.is_empty())
        .collect()
}

/// Like [`all_texts`], but only for matches whose closest `block` ancestor is
/// `scope` itself, so nested blocks keep their own content.
pub(crate) fn own_texts(scope: ElementRef, selector: &Selector, block: &Selector) -> Vec<String> {
    scope
        .select(selector)
        .filter(|element| {
            element
                .ancestors()
                .filter_map(ElementRef::wrap)
                .find(|ancestor| block.matches(ancestor))
                .is_some_and(|ancestor| ancestor.id() == scope.id())
        })
        .map(element_text)
        .filter(|text| !text.is_empty())
        .collect()
}

/// Text of `element` leaving out anything inside an `excluded` descendant.
/// Separate text nodes are joined with a space.
pub(crate) fn text_outside(element: ElementRef, excluded: &Selector) -> String {
    let texts = element
        .descendants()
        .filter_map(|node| {
            let text = node.value().as_text()?;
            let hidden = node
                .ancestors()
                .take_while(|ancestor| ancestor.id() != element.id())
                .filter_map(ElementRef::wrap)
                .any(|ancestor| excluded.matches(&ancestor));
            (!hidden).then_some(&**text)
        })
        .collect::<Vec<&str>>();
    normalize_whitespace(&texts.join(" "))
}

pub(crate) fn attribute(element: ElementRef, name: &str) -> Option<String> {
    element
        .value()
        .attr(name)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

pub(crate) fn child_elements<'a>(element: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    element.children().filter_map(ElementRef::wrap)
}

/// Prefixes `href` with `domain` unless it already points there.
pub(crate) fn resolve_link(domain: &str, href: &str) -> String {
    let domain = domain.trim_end_matches('/');
    let href = href.trim();
    if href.starts_with(domain) {
        return href.to_string();
    }
    format!("{domain}/{}", href.trim_start_matches('/'))
}

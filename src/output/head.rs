//! Embedding script tags into an HTML page's `<head>`.
//!
//! The page is streamed event by event and copied through unchanged; the
//! scripts are written immediately before the closing `</head>`.

use super::render_scripts;
use crate::{log, schema::JsonLd};
use anyhow::{Result, bail};
use quick_xml::{
    Reader, Writer,
    events::{BytesEnd, Event},
};
use std::io::{Cursor, Write};

type HtmlWriter = Writer<Cursor<Vec<u8>>>;

/// Lenient reader: HTML void elements and unclosed tags must not fail.
fn create_html_reader(content: &[u8]) -> Reader<&[u8]> {
    let mut reader = Reader::from_reader(content);
    reader.config_mut().trim_text(false);
    reader.config_mut().enable_all_checks(false);
    reader
}

fn is_head(name: &[u8]) -> bool {
    name.eq_ignore_ascii_case(b"head")
}

/// Write `scripts` followed by the closing tag.
fn write_head_end(writer: &mut HtmlWriter, elem: BytesEnd<'_>, scripts: &str) -> Result<()> {
    writer.get_mut().write_all(scripts.as_bytes())?;
    writer.write_event(Event::End(elem))?;
    Ok(())
}

/// Insert script tags for `schemas` before `</head>` in `html`.
///
/// Pages without a `<head>` (and empty schema lists) come back unchanged.
pub fn inject_into_head(html: &str, schemas: &[JsonLd]) -> Result<String> {
    let scripts = render_scripts(schemas)?;
    if scripts.is_empty() {
        return Ok(html.to_owned());
    }

    let mut reader = create_html_reader(html.as_bytes());
    let mut writer = Writer::new(Cursor::new(Vec::with_capacity(html.len() + scripts.len())));
    let mut injected = false;

    loop {
        match reader.read_event() {
            Ok(Event::End(elem)) if !injected && is_head(elem.name().as_ref()) => {
                write_head_end(&mut writer, elem.into_owned(), &scripts)?;
                injected = true;
            }
            Ok(Event::Eof) => break,
            Ok(event) => writer.write_event(event)?,
            Err(e) => bail!(
                "HTML parse error at position {}: {:?}",
                reader.error_position(),
                e
            ),
        }
    }

    if !injected {
        log!("warn"; "no </head> found, page left unchanged");
        return Ok(html.to_owned());
    }

    Ok(String::from_utf8(writer.into_inner().into_inner())?)
}

// ============================================================================
// Tests
// ============================================================================

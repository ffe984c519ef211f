//! Sitemap XML generation using `quick-xml`'s writer API.

use std::io::Cursor;

use quick_xml::{
  Writer,
  events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};

use crate::SitemapUrl;

pub const NS_SITEMAP: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

fn write_text_elem(w: &mut Writer<Cursor<Vec<u8>>>, name: &str, text: &str) {
  w.write_event(Event::Start(BytesStart::new(name))).unwrap();
  w.write_event(Event::Text(BytesText::new(text))).unwrap();
  w.write_event(Event::End(BytesEnd::new(name))).unwrap();
}

/// Serialise a URL list into a `<urlset>` document.
///
/// Optional fields are emitted only when present; priority is formatted
/// with one decimal place per the protocol's examples.
///
/// Writing to an in-memory cursor cannot fail, hence the unwraps.
pub fn write_xml(urls: &[SitemapUrl]) -> Vec<u8> {
  let cursor = Cursor::new(Vec::new());
  let mut w = Writer::new_with_indent(cursor, b' ', 2);

  w.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
    .unwrap();

  let mut urlset = BytesStart::new("urlset");
  urlset.push_attribute(("xmlns", NS_SITEMAP));
  w.write_event(Event::Start(urlset)).unwrap();

  for url in urls {
    w.write_event(Event::Start(BytesStart::new("url"))).unwrap();
    write_text_elem(&mut w, "loc", &url.loc);
    if let Some(lastmod) = url.lastmod {
      write_text_elem(&mut w, "lastmod", &lastmod.format("%Y-%m-%d").to_string());
    }
    if let Some(changefreq) = url.changefreq {
      write_text_elem(&mut w, "changefreq", changefreq.as_str());
    }
    if let Some(priority) = url.priority {
      write_text_elem(&mut w, "priority", &format!("{priority:.1}"));
    }
    w.write_event(Event::End(BytesEnd::new("url"))).unwrap();
  }

  w.write_event(Event::End(BytesEnd::new("urlset"))).unwrap();
  w.into_inner().into_inner()
}

//! Event-driven reader for `<order>` manifest documents.
//!
//! Text content is kept exactly as written, surrounding whitespace included,
//! so a reconciled manifest compares and rewrites the same strings it read.

use quick_xml::events::{BytesStart, Event};
use quick_xml::{DeError, Reader};

use crate::model::{CardEntry, CardSection, Details, Order};

type XmlReader<'a> = Reader<&'a [u8]>;

/// Parse an `<order>` document from XML text.
///
/// The root element must be `order`; any other root is rejected rather than
/// read as an empty order. Unknown elements are skipped.
pub fn parse_order(xml: &str) -> Result<Order, DeError> {
    let mut reader = Reader::from_str(xml);

    loop {
        match reader.read_event()? {
            Event::Start(e) if e.name().as_ref() == b"order" => return read_order(&mut reader),
            Event::Empty(e) if e.name().as_ref() == b"order" => return Ok(Order::default()),
            Event::Start(e) | Event::Empty(e) => {
                return Err(DeError::Custom(format!(
                    "expected root element <order>, found <{}>",
                    tag_name(&e)
                )))
            }
            Event::Eof => return Err(DeError::Custom("document has no root element".into())),
            // declaration, comments, whitespace
            _ => {}
        }
    }
}

fn tag_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.name().as_ref()).into_owned()
}

fn unexpected_eof(element: &str) -> DeError {
    DeError::InvalidXml(quick_xml::Error::UnexpectedEof(format!("</{}>", element)))
}

fn read_order(reader: &mut XmlReader<'_>) -> Result<Order, DeError> {
    let mut order = Order::default();

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.name().as_ref() {
                b"details" => order.details = Some(read_details(reader)?),
                b"fronts" => order.fronts = Some(read_section(reader, "fronts")?),
                b"backs" => order.backs = Some(read_section(reader, "backs")?),
                b"cardback" => order.cardback = Some(read_text(reader, "cardback")?),
                _ => {
                    reader.read_to_end(e.name())?;
                }
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"details" => order.details = Some(Details::default()),
                b"fronts" => order.fronts = Some(CardSection::default()),
                b"backs" => order.backs = Some(CardSection::default()),
                b"cardback" => order.cardback = Some(String::new()),
                _ => {}
            },
            Event::End(_) => return Ok(order),
            Event::Eof => return Err(unexpected_eof("order")),
            _ => {}
        }
    }
}

fn read_details(reader: &mut XmlReader<'_>) -> Result<Details, DeError> {
    let mut details = Details::default();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = tag_name(&e);
                let slot = match name.as_str() {
                    "quantity" => &mut details.quantity,
                    "bracket" => &mut details.bracket,
                    "stock" => &mut details.stock,
                    "foil" => &mut details.foil,
                    _ => {
                        reader.read_to_end(e.name())?;
                        continue;
                    }
                };
                *slot = Some(read_text(reader, &name)?);
            }
            Event::Empty(e) => match e.name().as_ref() {
                b"quantity" => details.quantity = Some(String::new()),
                b"bracket" => details.bracket = Some(String::new()),
                b"stock" => details.stock = Some(String::new()),
                b"foil" => details.foil = Some(String::new()),
                _ => {}
            },
            Event::End(_) => return Ok(details),
            Event::Eof => return Err(unexpected_eof("details")),
            _ => {}
        }
    }
}

fn read_section(reader: &mut XmlReader<'_>, element: &str) -> Result<CardSection, DeError> {
    let mut section = CardSection::default();

    loop {
        match reader.read_event()? {
            Event::Start(e) if e.name().as_ref() == b"card" => section.card.push(read_card(reader)?),
            Event::Empty(e) if e.name().as_ref() == b"card" => section.card.push(CardEntry::default()),
            Event::Start(e) => {
                reader.read_to_end(e.name())?;
            }
            Event::End(_) => return Ok(section),
            Event::Eof => return Err(unexpected_eof(element)),
            _ => {}
        }
    }
}

/// Read one `<card>`. A repeated field keeps its first value, so only the
/// first `<slots>` element pairs fronts with backs.
fn read_card(reader: &mut XmlReader<'_>) -> Result<CardEntry, DeError> {
    let (mut id, mut slots, mut name, mut query) = (None, None, None, None);

    loop {
        let (field, text) = match reader.read_event()? {
            Event::Start(e) => {
                let tag = tag_name(&e);
                let field = match tag.as_str() {
                    "id" => &mut id,
                    "slots" => &mut slots,
                    "name" => &mut name,
                    "query" => &mut query,
                    _ => {
                        reader.read_to_end(e.name())?;
                        continue;
                    }
                };
                (field, read_text(reader, &tag)?)
            }
            Event::Empty(e) => match e.name().as_ref() {
                b"id" => (&mut id, String::new()),
                b"slots" => (&mut slots, String::new()),
                b"name" => (&mut name, String::new()),
                b"query" => (&mut query, String::new()),
                _ => continue,
            },
            Event::End(_) => break,
            Event::Eof => return Err(unexpected_eof("card")),
            _ => continue,
        };
        field.get_or_insert(text);
    }

    Ok(CardEntry {
        id: id.unwrap_or_default(),
        slots: slots.unwrap_or_default(),
        name: name.unwrap_or_default(),
        query: query.unwrap_or_default(),
    })
}

/// Collect the text of a leaf element up to its end tag.
fn read_text(reader: &mut XmlReader<'_>, element: &str) -> Result<String, DeError> {
    let mut text = String::new();

    loop {
        match reader.read_event()? {
            Event::Text(t) => text.push_str(&t.unescape()?),
            Event::CData(c) => text.push_str(&reader.decoder().decode(&c)?),
            Event::Start(e) => {
                reader.read_to_end(e.name())?;
            }
            Event::End(_) => return Ok(text),
            Event::Eof => return Err(unexpected_eof(element)),
            _ => {}
        }
    }
}

//! Simple decoder to inspect raw (uncompressed) NBT files.

use std::collections::BTreeMap;
use std::fs;

use nbt_codec::codec::registry::codec_for;
use nbt_codec::{decode, Tag, TagType};

fn count_tags(tag: &Tag, counts: &mut BTreeMap<TagType, usize>) {
    *counts.entry(tag.tag_type()).or_default() += 1;
    match tag {
        Tag::List(list) => {
            for element in list {
                count_tags(element, counts);
            }
        }
        Tag::Compound(compound) => {
            for entry in compound {
                count_tags(&entry.tag, counts);
            }
        }
        _ => {}
    }
}

fn format_scalar(tag: &Tag) -> Option<String> {
    match tag {
        Tag::Byte(v) => Some(v.to_string()),
        Tag::Short(v) => Some(v.to_string()),
        Tag::Int(v) => Some(v.to_string()),
        Tag::Long(v) => Some(v.to_string()),
        Tag::Float(v) => Some(format!("{:.6}", v)),
        Tag::Double(v) => Some(format!("{:.6}", v)),
        Tag::String(bytes) => {
            let text = String::from_utf8_lossy(bytes);
            let preview: String = text.chars().take(60).collect();
            if text.chars().count() > 60 {
                Some(format!("\"{}...\"", preview))
            } else {
                Some(format!("\"{}\"", preview))
            }
        }
        Tag::ByteArray(bytes) => Some(format!("[{} bytes]", bytes.len())),
        Tag::List(_) | Tag::Compound(_) => None,
    }
}

fn main() {
    let path = std::env::args()
        .nth(1)
        .expect("usage: inspect <file.nbt> (already decompressed)");

    println!("Reading: {}", path);

    let data = fs::read(&path).expect("Failed to read file");
    println!("File size: {} bytes", data.len());

    let doc = decode(&data).expect("Failed to decode");

    println!("\n=== Root tags ({}) ===", doc.len());
    for root in &doc {
        println!(
            "{} \"{}\" ({} bytes)",
            codec_for(root.tag.tag_type()).name,
            root.name_lossy(),
            root.encoded_len()
        );

        if let Some(compound) = root.tag.as_compound() {
            for entry in compound.entries.iter().take(20) {
                let detail = format_scalar(&entry.tag).unwrap_or_else(|| match &entry.tag {
                    Tag::List(list) => format!("{} x {:?}", list.len(), list.element_type()),
                    Tag::Compound(c) => format!("{} entries", c.len()),
                    _ => String::new(),
                });
                println!(
                    "  {:<14} {:<24} {}",
                    codec_for(entry.tag.tag_type()).name,
                    entry.name_lossy(),
                    detail
                );
            }
            if compound.len() > 20 {
                println!("  ... and {} more entries", compound.len() - 20);
            }
        }
    }

    let mut counts = BTreeMap::new();
    for root in &doc {
        count_tags(&root.tag, &mut counts);
    }

    println!("\n=== Tag counts ===");
    for (tag_type, count) in &counts {
        println!("  {:<14} {}", codec_for(*tag_type).name, count);
    }
}

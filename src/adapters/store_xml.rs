use serde::Deserialize;

use crate::domain::model::{Condition, Unit};
use crate::utils::error::Result;

#[derive(Debug, Deserialize)]
struct InventoryXml {
    #[serde(rename = "ITEM", default)]
    items: Vec<ItemXml>,
}

#[derive(Debug, Deserialize)]
struct ItemXml {
    #[serde(rename = "ITEMID", default)]
    item_id: Option<String>,
    #[serde(rename = "ITEMNAME", default)]
    item_name: Option<String>,
    #[serde(rename = "QTY", default)]
    qty: Option<String>,
    #[serde(rename = "CONDITION", default)]
    condition: Option<String>,
    #[serde(rename = "REMARKS", default)]
    remarks: Option<String>,
}

/// Reads a store inventory export (`<INVENTORY><ITEM>...</ITEM></INVENTORY>`).
///
/// Unknown elements are ignored. A missing or unreadable quantity becomes 0
/// and a missing condition becomes `Unknown`.
pub fn parse_inventory(xml: &str) -> Result<Vec<Unit>> {
    let inventory: InventoryXml = quick_xml::de::from_str(xml)?;

    let units = inventory
        .items
        .into_iter()
        .map(|item| {
            let id = item.item_id.unwrap_or_default().trim().to_string();
            let quantity = match item.qty.as_deref().map(str::trim) {
                None | Some("") => 0,
                Some(raw) => raw.parse().unwrap_or_else(|_| {
                    tracing::warn!("Item {} has unreadable quantity '{}', using 0", id, raw);
                    0
                }),
            };
            Unit {
                condition: item
                    .condition
                    .as_deref()
                    .map(Condition::from_code)
                    .unwrap_or(Condition::Unknown),
                name: item
                    .item_name
                    .map(|name| name.trim().to_string())
                    .filter(|name| !name.is_empty()),
                remark: item
                    .remarks
                    .map(|remark| remark.trim().to_string())
                    .filter(|remark| !remark.is_empty()),
                quantity,
                id,
            }
        })
        .collect::<Vec<_>>();

    tracing::debug!("Parsed {} items from inventory export", units.len());
    Ok(units)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<INVENTORY>
  <ITEM>
    <ITEMTYPE>P</ITEMTYPE>
    <ITEMID>3001</ITEMID>
    <ITEMNAME>Brick 2 x 4</ITEMNAME>
    <COLOR>5</COLOR>
    <QTY>12</QTY>
    <CONDITION>N</CONDITION>
    <REMARKS> A12-3 </REMARKS>
  </ITEM>
  <ITEM>
    <ITEMID>3622</ITEMID>
    <QTY>abc</QTY>
    <CONDITION>u</CONDITION>
  </ITEM>
  <ITEM>
    <ITEMID>3004</ITEMID>
    <REMARKS>0451</REMARKS>
  </ITEM>
</INVENTORY>"#;

    #[test]
    fn test_parse_inventory_items() {
        let units = parse_inventory(SAMPLE).unwrap();
        assert_eq!(units.len(), 3);

        assert_eq!(units[0].id, "3001");
        assert_eq!(units[0].name.as_deref(), Some("Brick 2 x 4"));
        assert_eq!(units[0].quantity, 12);
        assert_eq!(units[0].condition, Condition::New);
        assert_eq!(units[0].remark.as_deref(), Some("A12-3"));

        assert_eq!(units[1].quantity, 0);
        assert_eq!(units[1].condition, Condition::Used);
        assert_eq!(units[1].remark, None);

        assert_eq!(units[2].condition, Condition::Unknown);
        assert_eq!(units[2].quantity, 0);
    }

    #[test]
    fn test_empty_inventory() {
        let units = parse_inventory("<INVENTORY></INVENTORY>").unwrap();
        assert!(units.is_empty());
    }

    #[test]
    fn test_malformed_xml_is_an_error() {
        assert!(parse_inventory("<INVENTORY><ITEM>").is_err());
    }
}

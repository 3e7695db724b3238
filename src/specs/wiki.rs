// src/specs/wiki.rs
//
// Primary source: a title's chip list page. One page holds one or more
// tables of chip rows; on the later titles each table sits under an <h2>
// section heading naming the classification, and version-exclusive
// sub-headings appear as bold single-cell rows inside the tables.

use crate::core::html::{
    h2_headings, img_alt, inner_after_open_tag, next_tag_block_ci, strip_tags, to_lower,
};
use crate::core::sanitize::normalize_entities;
use crate::titles::{Classification, TitleSpec};

/// One table row from the list page, positionally cell-addressed per the
/// title's column map. Sub-heading marker rows are kept and flagged; the
/// engine skips them before key generation.
pub struct PrimaryRow {
    pub classification: Classification,
    pub cells: Vec<String>,
    pub subheading: bool,
    /// 1-based row position within the title, for diagnostics.
    pub ordinal: usize,
}

/// Pull all chip rows for one title out of its list page.
pub fn parse_list_page(spec: &TitleSpec, doc: &str) -> Vec<PrimaryRow> {
    let content_start = to_lower(doc).find("mw-content-text").unwrap_or(0);
    let headings = h2_headings(doc);

    let mut rows_out = Vec::new();
    let mut ordinal = 0usize;
    let mut table_no = 0usize;
    let mut pos = content_start;

    while let Some((t_s, t_e)) = next_tag_block_ci(doc, "<table", "</table>", pos) {
        pos = t_e;
        table_no += 1;
        if table_no < spec.tables.0 {
            continue;
        }
        if table_no > spec.tables.1 {
            break;
        }

        let class = classification_for(spec, &headings, t_s);
        let table = &doc[t_s..t_e];

        // First row is the column header.
        let mut tr_pos = 0usize;
        let mut first = true;
        while let Some((tr_s, tr_e)) = next_tag_block_ci(table, "<tr", "</tr>", tr_pos) {
            let tr = &table[tr_s..tr_e];
            tr_pos = tr_e;
            if first {
                first = false;
                continue;
            }

            let mut cells = Vec::new();
            let mut sub = false;
            let mut td_pos = 0usize;
            let mut td_no = 0usize;
            while let Some((td_s, td_e)) = next_tag_block_ci(tr, "<td", "</td>", td_pos) {
                let block = &tr[td_s..td_e];
                td_pos = td_e;

                if td_no == 0 && to_lower(block).contains("<b>") {
                    sub = true;
                }
                let text = if Some(td_no) == spec.cols.element {
                    // Element cells are icons; the alt text names the element.
                    img_alt(block)
                        .unwrap_or_else(|| strip_tags(normalize_entities(&inner_after_open_tag(block))))
                } else {
                    strip_tags(normalize_entities(&inner_after_open_tag(block)))
                };
                cells.push(text);
                td_no += 1;
            }
            if cells.is_empty() {
                continue;
            }

            ordinal += 1;
            rows_out.push(PrimaryRow {
                classification: class,
                cells,
                subheading: sub,
                ordinal,
            });
        }
    }

    rows_out
}

/// Classification of a table = the nearest section heading above it.
/// Single-table titles have no headings and default to standard.
fn classification_for(
    spec: &TitleSpec,
    headings: &[(usize, String)],
    table_start: usize,
) -> Classification {
    if spec.tables == (1, 1) {
        return Classification::Standard;
    }
    headings
        .iter()
        .take_while(|(off, _)| *off < table_start)
        .last()
        .and_then(|(_, text)| Classification::from_heading(text))
        .unwrap_or(Classification::Standard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::titles::Title;

    const PAGE: &str = r#"
        <div id="mw-content-text">
        <h2><span>Mega Chips</span></h2>
        <table>
          <tr><th>ID</th><th>Image</th><th>Name</th><th>Element</th><th>Damage</th><th>Description</th></tr>
          <tr><td><b>Team ProtoMan</b></td></tr>
          <tr>
            <td>001</td><td></td><td><a href="/wiki/Roll">Roll</a></td>
            <td><a><img src="e.png" alt="BC Element Null"></a></td>
            <td>40</td><td>Attacks then heals you!</td>
          </tr>
        </table>
        </div>
    "#;

    #[test]
    fn subheading_rows_flagged_and_cells_positional() {
        let spec = Title::Bn5.spec();
        let rows = parse_list_page(spec, PAGE);
        assert_eq!(rows.len(), 2);
        assert!(rows[0].subheading);
        let chip = &rows[1];
        assert!(!chip.subheading);
        assert_eq!(chip.classification, Classification::Mega);
        assert_eq!(chip.cells[spec.cols.index], "001");
        assert_eq!(chip.cells[spec.cols.name], "Roll");
        assert_eq!(chip.cells[spec.cols.element.unwrap()], "BC Element Null");
        assert_eq!(chip.cells[spec.cols.damage.unwrap()], "40");
    }

    #[test]
    fn tables_outside_configured_range_ignored() {
        // bn4 starts at the second table; the first is page furniture.
        let doc = r#"
            <div id="mw-content-text">
            <table><tr><th>nav</th></tr><tr><td>junk</td></tr></table>
            <h2><span>Standard Chips</span></h2>
            <table>
              <tr><th>h</th></tr>
              <tr><td>001</td><td></td><td>Cannon</td><td><img alt="BC Element Null"></td><td>40</td><td>Cannon to attack 1 enemy</td></tr>
            </table>
            </div>
        "#;
        let rows = parse_list_page(Title::Bn4.spec(), doc);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].cells[2], "Cannon");
        assert_eq!(rows[0].classification, Classification::Standard);
    }
}

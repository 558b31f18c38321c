use crate::error::PurError;
use crate::extract::*;

const RESULTS_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>AUR (en) - Packages</title></head>
<body>
  <div id="archnavbar">
    <a href="/">AUR Home</a>
    <a href="/packages/">Packages</a>
  </div>
  <div id="pkglist-results" class="box">
    <p class="pkglist-nav"><a class="page" href="/packages/?O=10&amp;K=pkg">Next</a></p>
    <table class="results">
      <thead>
        <tr>
          <th>Name</th><th>Version</th><th>Votes</th><th>Popularity</th>
          <th>Description</th><th>Maintainer</th><th>Last Updated</th>
        </tr>
      </thead>
      <tbody>
        <tr>
          <td><a href="/packages/pkga">pkgA</a></td>
          <td>1.0</td>
          <td>5</td>
          <td>0.2</td>
          <td class="wrap">  desc1 </td>
          <td><a href="/account/alice" title="View account information for alice">alice</a></td>
          <td>2021-01-01</td>
        </tr>
        <tr>
          <td><a href="/packages/pkg-b">
              pkgB
          </a></td>
          <td><span class="flagged">2.0</span></td>
          <td>10</td>
          <td>0.4</td>
          <td class="wrap">desc2</td>
          <td><a href="/account/bob">bob</a></td>
          <td>2022-02-02</td>
        </tr>
      </tbody>
    </table>
  </div>
</body>
</html>"#;

const EMPTY_PAGE: &str = r#"<html><body>
  <a href="/packages/">Packages</a>
  <p>No packages matched your search criteria.</p>
</body></html>"#;

fn scenario_table() -> ResultsTable {
    ResultsTable::from_parts(
        ["pkgA", "pkgB"],
        [
            "pkgA", "1.0", "5", "0.2", "desc1", "alice", "2021-01-01", //
            "pkgB", "2.0", "10", "0.4", "desc2", "bob", "2022-02-02",
        ],
    )
}

#[test]
fn test_parse_results_page() {
    let table = ResultsTable::parse(RESULTS_PAGE).unwrap();

    assert_eq!(table.names(), ["pkgA", "pkgB"]);
    assert_eq!(table.cells().len(), 14);
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.cells()[0], "pkgA");
    assert_eq!(table.cells()[4], "desc1");
}

#[test]
fn test_parse_ignores_non_package_links() {
    let table = ResultsTable::parse(EMPTY_PAGE).unwrap();

    assert!(table.names().is_empty());
    assert!(table.cells().is_empty());
}

#[test]
fn test_columns_from_parsed_page() {
    let table = ResultsTable::parse(RESULTS_PAGE).unwrap();

    assert_eq!(table.column(Column::Version).unwrap(), ["1.0", "2.0"]);
    assert_eq!(table.column(Column::Votes).unwrap(), ["5", "10"]);
    assert_eq!(table.column(Column::Popularity).unwrap(), ["0.2", "0.4"]);
    assert_eq!(table.column(Column::Description).unwrap(), ["desc1", "desc2"]);
    assert_eq!(table.column(Column::Maintainer).unwrap(), ["alice", "bob"]);
    assert_eq!(
        table.column(Column::LastUpdate).unwrap(),
        ["2021-01-01", "2022-02-02"]
    );
}

#[test]
fn test_column_stride_matches_flat_index() {
    let rows = 4;
    let cells: Vec<String> = (0..rows * ROW_WIDTH).map(|i| format!(" cell{i} ")).collect();
    let table = ResultsTable::from_parts(Vec::<String>::new(), &cells);

    for column in Column::ALL {
        let values = table.column(column).unwrap();
        assert_eq!(values.len(), rows);
        for (i, value) in values.iter().enumerate() {
            assert_eq!(value, &format!("cell{}", ROW_WIDTH * i + column.offset()));
        }
    }
}

#[test]
fn test_column_offsets() {
    let offsets: Vec<usize> = Column::ALL.iter().map(Column::offset).collect();
    assert_eq!(offsets, [1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_column_of_empty_table_is_empty() {
    let table = ResultsTable::default();
    assert!(table.column(Column::Version).unwrap().is_empty());
}

#[test]
fn test_short_table_follows_stride_until_offset_is_missing() {
    let table = ResultsTable::from_parts(["pkgA"], ["pkgA", "1.0", "5"]);

    assert_eq!(table.row_count(), 0);
    assert_eq!(table.column(Column::Version).unwrap(), ["1.0"]);
    assert_eq!(table.column(Column::Votes).unwrap(), ["5"]);
    for column in [Column::Popularity, Column::Description, Column::LastUpdate] {
        assert!(matches!(table.column(column), Err(PurError::ParseError(_))));
    }
}

#[test]
fn test_trailing_partial_row_still_feeds_columns() {
    let mut cells: Vec<&str> = vec!["pkgA", "1.0", "5", "0.2", "desc1", "alice", "2021-01-01"];
    cells.extend(["pkgB", "2.0", "10"]);
    let table = ResultsTable::from_parts(["pkgA"], cells);

    assert_eq!(table.row_count(), 1);
    assert_eq!(table.column(Column::Version).unwrap(), ["1.0", "2.0"]);
    assert_eq!(table.column(Column::Votes).unwrap(), ["5", "10"]);
    assert_eq!(table.column(Column::Popularity).unwrap(), ["0.2"]);
    // Only complete rows become records.
    assert_eq!(table.records().unwrap().len(), 1);
}

#[test]
fn test_records_scenario() {
    let records = scenario_table().records().unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "pkgA");
    assert_eq!(records[0].version, "1.0");
    assert_eq!(records[0].votes, "5");
    assert_eq!(records[0].popularity, "0.2");
    assert_eq!(records[0].description, "desc1");
    assert_eq!(records[0].maintainer, "alice");
    assert_eq!(records[0].last_update, "2021-01-01");
    assert_eq!(records[1].name, "pkgB");
    assert_eq!(records[1].maintainer, "bob");
}

#[test]
fn test_records_from_parsed_page() {
    let table = ResultsTable::parse(RESULTS_PAGE).unwrap();
    assert_eq!(table.records().unwrap(), scenario_table().records().unwrap());
}

#[test]
fn test_records_name_count_mismatch_is_parse_error() {
    let table = ResultsTable::from_parts(
        ["pkgA"],
        [
            "pkgA", "1.0", "5", "0.2", "desc1", "alice", "2021-01-01", //
            "pkgB", "2.0", "10", "0.4", "desc2", "bob", "2022-02-02",
        ],
    );

    let err = table.records().unwrap_err();
    assert!(matches!(err, PurError::ParseError(_)));
    assert!(err.to_string().contains("1 package links but 2 table rows"));
}

#[test]
fn test_records_of_empty_table() {
    assert!(ResultsTable::default().records().unwrap().is_empty());
}

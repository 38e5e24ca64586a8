/// Name of a column in the working table.
/// Examples: `date.issued`, `year_issued`, `description_length`
pub type ColumnName = String;
/// Vocabulary term produced by tokenizing the free-text column.
/// Examples: `engine`, `failure`, `unknown`
pub type Term = String;

/// Adds two integers. Pure and total; the report only ever feeds it small
/// fixed operands.
pub(crate) fn add(a: i64, b: i64) -> i64 {
    a + b
}

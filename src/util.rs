/// Append each item of `items` that is not already in `seq`. Order of first occurrence wins.
pub fn add_setwise<I, S>(seq: &mut Vec<String>, items: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for item in items {
        let item = item.as_ref();
        if !seq.iter().any(|s| s == item) {
            seq.push(item.to_string());
        }
    }
}

/// Remove every member of `items` from `seq`, keeping the order of the rest
pub fn subtract_setwise<I, S>(seq: &mut Vec<String>, items: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for item in items {
        let item = item.as_ref();
        seq.retain(|s| s != item);
    }
}

use std::io::{self, BufRead, Write};

use crate::domain::AccountGroup;

/// Asks the operator which group the run imports into. Returns `None` after printing a
/// notice when the answer is neither `1` nor `2`.
pub fn prompt_group<R, W>(mut input: R, mut output: W) -> io::Result<Option<AccountGroup>>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "Choose account group:\n1 = default\n2 = squirtle")?;
    write!(output, "Enter your choice (1 or 2): ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    let group = AccountGroup::from_choice(&line);
    if group.is_none() {
        writeln!(output, "Invalid choice. Exiting.")?;
    }
    Ok(group)
}

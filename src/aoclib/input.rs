use std::fs;

/// Read the whole puzzle input: the concatenation of any files named on the
/// command line, or everything from stdin when no files are given.
pub fn read_input() -> anyhow::Result<String> {
    let paths = std::env::args_os().skip(1).collect::<Vec<_>>();
    if paths.is_empty() {
        let stdin = std::io::stdin();
        return Ok(std::io::read_to_string(stdin)?);
    }
    let mut buffer = String::new();
    for path in paths {
        let contents = fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("error reading {:?}: {}", path, e))?;
        buffer.push_str(&contents);
    }
    Ok(buffer)
}

/// A parsed GTP command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub id: Option<u32>,
    pub name: String,
    pub args: Vec<String>,
}

impl Command {
    /// Parse one input line. Returns `None` for blank lines and comments.
    pub fn parse(line: &str) -> Option<Self> {
        let line = match line.find('#') {
            Some(i) => &line[..i],
            None => line,
        };
        let line: String = line
            .chars()
            .filter(|c| !c.is_control() || *c == '\t')
            .map(|c| if c == '\t' { ' ' } else { c })
            .collect();

        let mut parts = line.split_whitespace();
        let first = parts.next()?;

        let (id, name) = match first.parse::<u32>() {
            Ok(id) => (Some(id), parts.next()?),
            Err(_) => (None, first),
        };

        Some(Command {
            id,
            name: name.to_lowercase(),
            args: parts.map(String::from).collect(),
        })
    }

    pub fn arg(&self, i: usize) -> Option<&str> {
        self.args.get(i).map(String::as_str)
    }
}

//! Fixed page boilerplate around the rendered document body.

/// Everything up to and including the opening `<title>` line.
pub const HEAD_START: &str = r#"<!DOCTYPE html>
<html xmlns="http://www.w3.org/1999/xhtml">
<head>
<meta http-equiv="content-type" content="text/html; charset=UTF-8">
<meta charset="utf-8">
<meta name="generator" content="dascandy/fiets">
<title>
"#;

/// Closes the title, embeds the stylesheet and opens `<body>`.
pub const HEAD_END: &str = r#"</title>
  <style type="text/css">
body {
  margin: 5em;
  font-family: sans-serif;
  hyphens: auto;
  line-height: 1.35;
}
ul {
  padding-left: 2em;
}
h1, h2, h3, h4 {
  position: relative;
  line-height: 1;
}
a.self-link {
  position: absolute;
  top: 0;
  left: calc(-1 * (3.5rem - 26px));
  width: calc(3.5rem - 26px);
  height: 2em;
  text-align: center;
  border: none;
  transition: opacity .2s;
  opacity: .5;
  font-family: sans-serif;
  font-weight: normal;
  font-size: 83%;
}
a.self-link:hover { opacity: 1; }
a.self-link::before { content: "§"; }
span.identifier {
  font-style: italic;
}
span.new {
  text-decoration: underline;
  background-color: #006e28;
}
span.code {
  font-family: Courier New, monospace;
  background-color: #e8e8e8;
  white-space: pre;
}
span.delete {
  text-decoration: line-through;
  background-color: #bf0303;
}
p.indent {
  margin-left: 50px;
}
table {
  border: 1px solid black;
  border-collapse: collapse;
  margin-left: auto;
  margin-right: auto;
  margin-top: 0.8em;
  text-align: left;
  hyphens: none; 
}
td, th {
  padding-left: 1em;
  padding-right: 1em;
  vertical-align: top;
}
th {
  border-bottom: 1px solid black;
}
</style>
</head>
<body>
"#;

/// Closes the page.
pub const FOOTER: &str = "</body></html>\n";

/// Write the page head, stylesheet and centered title heading.
pub(crate) fn write_page_start(title: &str, out: &mut String) {
    out.push_str(HEAD_START);
    out.push_str(title);
    out.push_str(HEAD_END);
    out.push_str(r#"<h1 class="title" style="text-align:center">"#);
    out.push_str(title);
    out.push_str("</h1>");
}

/// Write the closing boilerplate.
pub(crate) fn write_page_end(out: &mut String) {
    out.push_str(FOOTER);
}

/// Combined length of the fixed boilerplate, used to size output buffers.
pub(crate) const BOILERPLATE_LEN: usize = HEAD_START.len() + HEAD_END.len() + FOOTER.len();

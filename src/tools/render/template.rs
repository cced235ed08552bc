/// Inline stylesheet for the static report. Kept self-contained so the file
/// can be opened without network access.
pub(super) const REPORT_CSS: &str = r#"
        * { box-sizing: border-box; margin: 0; padding: 0; }
        body {
            font-family: Arial, sans-serif;
            background: #f4f6f9;
            padding: 30px 40px;
            color: #333;
        }
        h1 {
            text-align: center;
            margin-bottom: 10px;
            color: #2c3e50;
            font-size: 2em;
        }
        .subtitle {
            text-align: center;
            color: #777;
            margin-bottom: 30px;
            font-size: 0.95em;
        }
        .section-title {
            font-size: 1.2em;
            font-weight: bold;
            color: #2c3e50;
            margin-bottom: 12px;
        }
        .llm-box {
            background: white;
            border-radius: 10px;
            padding: 25px 30px;
            box-shadow: 0 2px 8px rgba(0,0,0,0.07);
            line-height: 1.7;
        }
        .llm-box h1, .llm-box h2, .llm-box h3 {
            color: #2c3e50;
            margin: 18px 0 8px;
        }
        .llm-box h2 { font-size: 1.15em; border-bottom: 1px solid #eee; padding-bottom: 4px; }
        .llm-box table {
            width: 100%;
            border-collapse: collapse;
            margin: 15px 0;
            font-size: 0.88em;
        }
        .llm-box th { background: #3498db; color: white; padding: 10px 14px; }
        .llm-box td { padding: 9px 14px; border-bottom: 1px solid #eee; }
        .llm-box tr:hover td { background: #f0f7ff; }
        .llm-box ul, .llm-box ol { margin: 8px 0 8px 22px; }
        .llm-box li { margin: 4px 0; }
        .llm-box pre {
            background: #f4f4f4;
            padding: 12px 16px;
            border-radius: 6px;
            overflow-x: auto;
        }
        .llm-box code {
            background: #f4f4f4;
            padding: 2px 6px;
            border-radius: 4px;
            font-size: 0.9em;
        }
        .llm-box strong { color: #2c3e50; }
"#;

//! Server-rendered counter page.

/// Operation triggered by one of the page controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterOp {
    Increment,
    Decrement,
    Reset,
}

impl CounterOp {
    pub fn as_str(self) -> &'static str {
        match self {
            CounterOp::Increment => "increment",
            CounterOp::Decrement => "decrement",
            CounterOp::Reset => "reset",
        }
    }

    /// Notification text shown after the operation produced `value`.
    pub fn message(self, value: i64) -> String {
        match self {
            CounterOp::Increment => format!("Counter incremented to {value}"),
            CounterOp::Decrement => format!("Counter decremented to {value}"),
            CounterOp::Reset => "Counter reset to 0".to_string(),
        }
    }

    fn notice_kind(self) -> &'static str {
        match self {
            CounterOp::Increment => "positive",
            CounterOp::Decrement => "info",
            CounterOp::Reset => "warning",
        }
    }
}

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; background: #f8fafc; color: #1f2937; }
h1 { text-align: center; font-size: 1.875rem; margin: 2rem 0; }
.card { width: 24rem; margin: 0 auto; padding: 2rem; background: #fff; border-radius: 0.75rem; box-shadow: 0 10px 25px rgba(0,0,0,.12); }
.display { font-size: 3.75rem; font-weight: 700; text-align: center; margin-bottom: 2rem; }
.row { display: flex; gap: 1rem; justify-content: center; margin-bottom: 1.5rem; }
.round { width: 4rem; height: 4rem; border: 0; border-radius: 9999px; color: #fff; font-size: 1.5rem; font-weight: 700; cursor: pointer; }
.dec { background: #ef4444; } .inc { background: #10b981; }
.reset { width: 100%; padding: .5rem 1.5rem; border: 0; border-radius: .5rem; background: #64748b; color: #fff; cursor: pointer; }
.notice { margin: 1rem auto; width: 24rem; padding: .75rem 1rem; border-radius: .5rem; color: #fff; text-align: center; }
.notice.positive { background: #10b981; } .notice.info { background: #2563eb; } .notice.warning { background: #f59e0b; }
"#;

/// Render the page for `value`, with a notification for the operation that produced it.
pub fn render_counter_page(value: i64, last_op: Option<CounterOp>) -> String {
    let notice = last_op
        .map(|op| {
            format!(
                r#"<div class="notice {}" role="status" data-testid="notification">{}</div>"#,
                op.notice_kind(),
                op.message(value)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Counter Application</title>
<style>{STYLE}</style>
</head>
<body>
<h1>Counter Application</h1>
{notice}
<div class="card">
  <div class="display" data-testid="counter-display">{value}</div>
  <div class="row">
    <form method="post" action="/counter/decrement"><button class="round dec" type="submit" data-testid="decrement-button">&minus;</button></form>
    <form method="post" action="/counter/increment"><button class="round inc" type="submit" data-testid="increment-button">+</button></form>
  </div>
  <form method="post" action="/counter/reset"><button class="reset" type="submit" data-testid="reset-button">Reset</button></form>
</div>
</body>
</html>
"#
    )
}

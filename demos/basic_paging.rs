//! Basic paging demo
//!
//! Pages an in-memory "orders" listing for every supported dialect and prints
//! the generated SQL and totals. Counts are answered by a closure, so no
//! database is needed.
//!
//! Run with: cargo run --example basic_paging

use sqlpager::prelude::*;

const ORDER_COUNT: i64 = 47;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let executor = FnCountExecutor::new(|sql: &str| -> Result<i64, CountError> {
        println!("  count: {}", sql);
        Ok(ORDER_COUNT)
    });

    for dialect in ["mysql", "oracle", "sqlserver", "sqlite"] {
        println!("== {}", dialect);

        let interceptor = PageInterceptor::new(
            &PagerConfig::new(dialect).with_page_statement_pattern(".*ByPage"),
        )?;

        let mut statement = PagedStatement::new(
            "orders.listByPage",
            "select * from orders where status = ?",
        )
        .with_params(vec![Value::from("shipped")])
        .with_page(interceptor.page_request(3))
        .with_order_by("-createdAt,customerName");

        let totals = interceptor.intercept(&mut statement, &executor).await?;
        println!("  page:  {}", statement.sql);
        if let Some(totals) = totals {
            println!(
                "  total: {} rows, {} pages, prev {}, next {}",
                totals.total_count, totals.total_page, totals.pre_page, totals.next_page
            );
        }
    }

    // Every row as a single page
    let interceptor = PageInterceptor::new(&PagerConfig::new("mysql"))?;
    let mut statement = PagedStatement::new("orders.allPage", "select * from orders")
        .with_page(PageRequest::all());
    interceptor.intercept(&mut statement, &executor).await?;
    println!("== fetch all\n  page:  {}", statement.sql);

    Ok(())
}

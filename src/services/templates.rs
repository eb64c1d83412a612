// src/services/templates.rs
use std::fmt::Display;

use super::knowledge::KNOWLEDGE;

pub const TRENDING_SHOWN: usize = 5;
pub const SUPPLIERS_SHOWN: usize = 4;

/// Renders items as a `1. item` list, one per line.
fn numbered<T: Display>(items: impl IntoIterator<Item = T>) -> String {
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}", i + 1, item))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn trending() -> String {
    let products = numbered(KNOWLEDGE.trending.iter().take(TRENDING_SHOWN));
    format!(
        r#"🔥 **Trending Products Right Now:**

{products}

**Why these products work:**
- High demand on social media platforms
- Good profit margins (40-70%)
- Compact and easy to ship
- Proven sales history
- Low return rates

Would you like detailed analysis on any specific product?"#
    )
}

pub fn suppliers() -> String {
    let suppliers = numbered(KNOWLEDGE.suppliers.iter().take(SUPPLIERS_SHOWN));
    format!(
        r#"🏭 **Reliable Supplier Recommendations:**

{suppliers}

**Supplier Selection Tips:**
- Check seller ratings (aim for 95%+)
- Review shipping times and costs
- Verify product quality through samples
- Ensure good communication and support
- Compare pricing across multiple suppliers

Need help connecting with a specific supplier?"#
    )
}

pub fn marketing() -> String {
    r#"📈 **Effective Marketing Strategies:**

**1. Social Media Marketing**
- TikTok/Instagram Reels for product demos
- Influencer partnerships for credibility
- User-generated content campaigns

**2. Paid Advertising**
- Facebook Ads targeting specific interests
- Google Shopping for search intent
- Retargeting campaigns for cart abandonment

**3. Content Marketing**
- SEO-optimized blog posts
- YouTube product reviews
- Email marketing sequences

**4. Conversion Optimization**
- A/B test product pages
- Offer time-limited discounts
- Build trust with reviews and testimonials

**Budget Tip:** Start with $20-50/day on Facebook Ads, test and scale what works!"#
        .to_string()
}

pub fn profit() -> String {
    r#"💰 **Profit Margin Analysis:**

**Ideal Margins by Category:**
- Electronics: 40-60%
- Fashion: 50-80%
- Home Decor: 45-70%
- Beauty: 60-100%
- Fitness: 50-75%

**Pricing Formula:**
Product Cost + Shipping + (Desired Margin) = Selling Price

**Example Calculation:**
- Product cost: $10
- Shipping: $5
- Total cost: $15
- Desired 60% margin: $15 / 0.4 = $37.50 selling price
- Profit per sale: $22.50

**Pro Tips:**
- Factor in advertising costs (20-30% of revenue)
- Account for returns and refunds (5-10%)
- Offer bundles to increase average order value
- Use psychological pricing ($29.97 vs $30)"#
        .to_string()
}

pub fn onboarding() -> String {
    r#"🚀 **Getting Started with Dropshipping:**

**Step 1: Choose Your Niche**
Pick a focused market (fitness, tech, beauty, etc.)

**Step 2: Find Suppliers**
Research on AliExpress, CJDropshipping, or Spocket

**Step 3: Set Up Store**
Use Shopify, WooCommerce, or BigCommerce

**Step 4: Add Products**
Select 10-20 winning products to start

**Step 5: Market Your Store**
Start with social media and paid ads

**Step 6: Process Orders**
Automate with Oberlo or DSers

**Initial Investment:** $200-500 for:
- Store setup ($29-50/month)
- Domain name ($10-15/year)
- Initial ads ($100-300)
- Product samples ($50-100)

Ready to dive deeper into any step?"#
        .to_string()
}

pub fn niches() -> String {
    let niches = numbered(KNOWLEDGE.niches);
    format!(
        r#"🎯 **Profitable Niches for 2024:**

{niches}

**How to Validate a Niche:**
✓ Search volume on Google Trends
✓ Active Facebook groups/communities
✓ Existing successful competitors
✓ Products solving specific problems
✓ Passionate customer base

**Red Flags to Avoid:**
✗ Highly seasonal products only
✗ Oversaturated markets (fidget spinners)
✗ Heavy/fragile items (high shipping costs)
✗ Restricted items (weapons, medical)

Want to explore a specific niche in detail?"#
    )
}

pub fn shipping() -> String {
    r#"📦 **Shipping & Fulfillment Guide:**

**Shipping Options:**
- **ePacket:** 10-20 days, affordable
- **Express:** 3-7 days, premium price
- **Local Warehouses:** 2-5 days, best experience

**Strategies to Handle Long Shipping:**
1. Set clear expectations (15-25 business days)
2. Offer expedited shipping option
3. Send tracking immediately
4. Use suppliers with US/EU warehouses
5. Provide order status updates

**Shipping Costs:**
- Build into product price, or
- Offer free shipping over $X, or
- Charge transparent shipping fee

**Pro Tip:** Test products yourself first to verify quality and shipping times!"#
        .to_string()
}

pub fn legal() -> String {
    r#"⚖️ **Legal & Business Setup:**

**Business Structure:**
- Sole Proprietorship (simplest)
- LLC (liability protection recommended)
- Corporation (for scaling)

**Required Registrations:**
1. Business license (local)
2. Sales tax permit (state)
3. EIN from IRS (federal)
4. Terms of service & privacy policy

**Tax Considerations:**
- Collect sales tax where required
- Track all expenses for deductions
- File quarterly estimated taxes
- Consider hiring a CPA

**Legal Protection:**
- Product liability insurance
- Clear refund/return policies
- Copyright-free images only
- Comply with FTC advertising rules

**Disclaimer:** Consult with a local attorney and accountant for your specific situation!"#
        .to_string()
}

pub fn fallback() -> String {
    r#"🤖 **I'm your Dropshipping AI Assistant!**

I can help you with:

📦 **Product Research** - Find trending products and niches
🏭 **Supplier Sourcing** - Connect with reliable vendors
📈 **Marketing Strategies** - Grow your sales
💰 **Profit Analysis** - Calculate margins and pricing
🚀 **Getting Started** - Complete beginner guides
📊 **Business Analytics** - Track performance

**What would you like to know?** Ask me anything specific about:
- Trending products
- Supplier recommendations
- Marketing tactics
- Profit margins
- Shipping strategies
- Legal requirements
- Niche selection

Try asking: "What are trending products right now?" or "How do I find reliable suppliers?""#
        .to_string()
}
